pub mod control_spec;
pub mod select_options;
