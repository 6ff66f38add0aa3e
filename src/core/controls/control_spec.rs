use serde::{Deserialize, Serialize};

use crate::core::controls::select_options::SelectOptions;

/// One tunable parameter: a slider over `[min, max]` or a dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ControlSpec {
    Range { min: f64, max: f64 },
    Select { options: SelectOptions },
}

impl ControlSpec {
    #[must_use]
    pub const fn range(min: f64, max: f64) -> Self {
        Self::Range { min, max }
    }

    #[must_use]
    pub const fn select(options: SelectOptions) -> Self {
        Self::Select { options }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Range { .. } => "range",
            Self::Select { .. } => "select",
        }
    }

    /// Whether `value` is a legal setting for this control.
    #[must_use]
    pub fn accepts(&self, value: f64) -> bool {
        match self {
            Self::Range { min, max } => value.is_finite() && *min <= value && value <= *max,
            Self::Select { options } => options.contains(value),
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            Self::Range { min, max } => Some((*min, *max)),
            Self::Select { .. } => None,
        }
    }

    #[must_use]
    pub fn options(&self) -> Option<&SelectOptions> {
        match self {
            Self::Range { .. } => None,
            Self::Select { options } => Some(options),
        }
    }
}
