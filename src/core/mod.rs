pub mod catalog;
pub mod controls;
pub mod data;
pub mod fractals;
pub mod session;
