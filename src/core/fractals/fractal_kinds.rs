use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::core::catalog::errors::CatalogError;

/// The registered fractal types, in declaration order.
///
/// The discriminant is the fractal's enum value: the compact integer the
/// renderer uses in place of the name. It never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum FractalKinds {
    #[default]
    #[serde(rename = "julia set")]
    JuliaSet = 0,
    #[serde(rename = "mandelbrot set")]
    MandelbrotSet = 1,
    #[serde(rename = "burning ship")]
    BurningShip = 2,
    #[serde(rename = "modified collatz")]
    ModifiedCollatz = 3,
    #[serde(rename = "box thing")]
    BoxThing = 4,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::JuliaSet,
        Self::MandelbrotSet,
        Self::BurningShip,
        Self::ModifiedCollatz,
        Self::BoxThing,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::JuliaSet => "julia set",
            Self::MandelbrotSet => "mandelbrot set",
            Self::BurningShip => "burning ship",
            Self::ModifiedCollatz => "modified collatz",
            Self::BoxThing => "box thing",
        }
    }

    #[must_use]
    pub const fn enum_value(self) -> u32 {
        self as u32
    }

    pub fn from_name(name: &str) -> Result<Self, CatalogError> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name() == name)
            .ok_or_else(|| CatalogError::UnknownFractal {
                name: name.to_owned(),
            })
    }

    pub fn from_enum_value(value: u32) -> Result<Self, CatalogError> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.enum_value() == value)
            .ok_or(CatalogError::UnknownEnumValue { value })
    }
}

impl fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalKinds {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
