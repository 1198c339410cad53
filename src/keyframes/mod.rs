pub mod model;
pub mod number;
