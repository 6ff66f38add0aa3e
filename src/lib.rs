mod controllers;
mod core;
mod observability;
mod presenters;

pub use controllers::cli::args::{Cli, Commands, OutputFormat};
pub use controllers::cli::catalog_controller::{CatalogController, CliError};
pub use controllers::ports::catalog_presenter::{CatalogPresenterPort, CatalogView};
pub use crate::core::catalog::default_entry::DefaultStoreEntry;
pub use crate::core::catalog::errors::{CatalogError, CatalogTable, ValidationIssue};
pub use crate::core::catalog::fractal_catalog::{
    Catalog, catalog, get_defaults, get_enum_value, get_menu_config, list_fractal_names,
};
pub use crate::core::catalog::fractal_definition::FractalDefinition;
pub use crate::core::catalog::validation::validate;
pub use crate::core::controls::control_spec::ControlSpec;
pub use crate::core::controls::select_options::SelectOptions;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::session::errors::SessionError;
pub use crate::core::session::session_store::SessionStore;
pub use observability::logging::{LogFormat, init_logging};
pub use presenters::json::json_presenter::JsonPresenter;
pub use presenters::text::text_presenter::TextPresenter;
