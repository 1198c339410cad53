pub mod output;
pub mod registry;
