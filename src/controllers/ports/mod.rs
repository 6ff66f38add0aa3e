pub mod catalog_presenter;
