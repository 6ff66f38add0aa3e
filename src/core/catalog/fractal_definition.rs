use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::controls::control_spec::ControlSpec;

/// UI schema for one fractal type: which controls exist and the order the
/// menu shows them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FractalDefinition {
    pub menu_order: Vec<String>,
    pub controls: BTreeMap<String, ControlSpec>,
}

impl FractalDefinition {
    pub fn new<M, C>(menu_order: M, controls: C) -> Self
    where
        M: IntoIterator<Item = &'static str>,
        C: IntoIterator<Item = (&'static str, ControlSpec)>,
    {
        Self {
            menu_order: menu_order.into_iter().map(str::to_owned).collect(),
            controls: controls
                .into_iter()
                .map(|(name, control)| (name.to_owned(), control))
                .collect(),
        }
    }

    #[must_use]
    pub fn control(&self, parameter: &str) -> Option<&ControlSpec> {
        self.controls.get(parameter)
    }

    /// Controls in menu order. Menu entries without a control are skipped.
    pub fn ordered_controls(&self) -> impl Iterator<Item = (&str, &ControlSpec)> {
        self.menu_order.iter().filter_map(|parameter| {
            self.controls
                .get(parameter)
                .map(|control| (parameter.as_str(), control))
        })
    }
}
