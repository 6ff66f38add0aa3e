pub mod point;
pub mod viewport;
