pub mod builtin;
pub mod default_entry;
pub mod errors;
pub mod fractal_catalog;
pub mod fractal_definition;
pub mod validation;
