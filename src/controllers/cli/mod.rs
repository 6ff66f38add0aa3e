pub mod args;
pub mod catalog_controller;
