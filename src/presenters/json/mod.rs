pub mod json_presenter;
