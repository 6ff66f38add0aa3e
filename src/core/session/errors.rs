use thiserror::Error;

use crate::core::{
    catalog::errors::CatalogError, data::viewport::ViewportError,
    fractals::fractal_kinds::FractalKinds,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{fractal} has no parameter '{parameter}'")]
    UnknownParameter {
        fractal: FractalKinds,
        parameter: String,
    },

    #[error("{fractal}: {value} is outside [{min}, {max}] for '{parameter}'")]
    OutOfRange {
        fractal: FractalKinds,
        parameter: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{fractal}: {value} is not an option of '{parameter}'")]
    InvalidOption {
        fractal: FractalKinds,
        parameter: String,
        value: f64,
    },

    #[error("{fractal}: {source}")]
    InvalidViewport {
        fractal: FractalKinds,
        #[source]
        source: ViewportError,
    },
}
