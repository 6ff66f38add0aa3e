use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::data::{point::Point, viewport::Viewport};

/// Initial parameter values and view window for one fractal type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultStoreEntry {
    pub config: BTreeMap<String, f64>,
    pub viewport: Viewport,
}

impl DefaultStoreEntry {
    pub fn new<C>(config: C, center: Point, range: Point) -> Self
    where
        C: IntoIterator<Item = (&'static str, f64)>,
    {
        Self {
            config: config
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value))
                .collect(),
            viewport: Viewport { center, range },
        }
    }

    #[must_use]
    pub fn value(&self, parameter: &str) -> Option<f64> {
        self.config.get(parameter).copied()
    }
}
