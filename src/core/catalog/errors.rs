use std::fmt;

use thiserror::Error;

use crate::core::{data::viewport::ViewportError, fractals::fractal_kinds::FractalKinds};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("unknown fractal '{name}'")]
    UnknownFractal { name: String },

    #[error("no fractal has enum value {value}")]
    UnknownEnumValue { value: u32 },

    #[error("fractal catalog failed validation with {} issue(s)", issues.len())]
    InvalidCatalog { issues: Vec<ValidationIssue> },
}

/// The three lookup tables the catalog exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTable {
    MenuConfig,
    DefaultStore,
    FractalEnum,
}

impl fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MenuConfig => write!(f, "menu config"),
            Self::DefaultStore => write!(f, "default store"),
            Self::FractalEnum => write!(f, "fractal enum"),
        }
    }
}

/// A single broken cross-table invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationIssue {
    #[error("{fractal}: missing from the {table}")]
    MissingEntry {
        table: CatalogTable,
        fractal: FractalKinds,
    },

    #[error("{fractal}: '{parameter}' appears more than once in the menu order")]
    DuplicateMenuEntry {
        fractal: FractalKinds,
        parameter: String,
    },

    #[error("{fractal}: menu entry '{parameter}' has no control")]
    MenuEntryWithoutControl {
        fractal: FractalKinds,
        parameter: String,
    },

    #[error("{fractal}: control '{parameter}' is not in the menu order")]
    ControlNotInMenu {
        fractal: FractalKinds,
        parameter: String,
    },

    #[error("{fractal}: range control '{parameter}' has invalid bounds [{min}, {max}]")]
    InvalidRange {
        fractal: FractalKinds,
        parameter: String,
        min: f64,
        max: f64,
    },

    #[error("{fractal}: select control '{parameter}' has no options")]
    EmptySelect {
        fractal: FractalKinds,
        parameter: String,
    },

    #[error("{fractal}: default '{parameter}' has no control")]
    DefaultWithoutControl {
        fractal: FractalKinds,
        parameter: String,
    },

    #[error("{fractal}: default {value} is not accepted by control '{parameter}'")]
    DefaultOutOfBounds {
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

    #[error("{fractal}: enum value {value} is already used by {other}")]
    DuplicateEnumValue {
        fractal: FractalKinds,
        other: FractalKinds,
        value: u32,
    },

    #[error("{fractal}: enum value {value} does not match its discriminator {expected}")]
    EnumValueMismatch {
        fractal: FractalKinds,
        value: u32,
        expected: u32,
    },
}

impl ValidationIssue {
    #[must_use]
    pub const fn fractal(&self) -> FractalKinds {
        match self {
            Self::MissingEntry { fractal, .. }
            | Self::DuplicateMenuEntry { fractal, .. }
            | Self::MenuEntryWithoutControl { fractal, .. }
            | Self::ControlNotInMenu { fractal, .. }
            | Self::InvalidRange { fractal, .. }
            | Self::EmptySelect { fractal, .. }
            | Self::DefaultWithoutControl { fractal, .. }
            | Self::DefaultOutOfBounds { fractal, .. }
            | Self::InvalidViewport { fractal, .. }
            | Self::DuplicateEnumValue { fractal, .. }
            | Self::EnumValueMismatch { fractal, .. } => *fractal,
        }
    }
}
