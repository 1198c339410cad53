pub mod interp;
pub mod params;
pub mod resolve;
