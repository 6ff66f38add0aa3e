use std::io::Write;

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::controllers::ports::catalog_presenter::{CatalogPresenterPort, CatalogView};

/// Pretty-printed JSON, shaped like the tables the UI layer consumes.
#[derive(Debug, Default)]
pub struct JsonPresenter {}

impl JsonPresenter {
    pub fn new() -> Self {
        Self {}
    }

    fn to_value(view: CatalogView<'_>) -> serde_json::Result<Value> {
        match view {
            CatalogView::Names(names) => Ok(Value::Array(
                names
                    .iter()
                    .map(|(kind, value)| json!({ "name": kind.display_name(), "value": value }))
                    .collect(),
            )),
            CatalogView::Menu { kind, definition } => keyed(kind.display_name(), definition),
            CatalogView::Defaults { kind, entry } => keyed(kind.display_name(), entry),
            CatalogView::EnumValue { kind, value } => keyed(kind.display_name(), value),
            CatalogView::Catalog(catalog) => serde_json::to_value(catalog),
            CatalogView::Validation(issues) => Ok(json!({
                "valid": issues.is_empty(),
                "issues": issues.iter().map(ToString::to_string).collect::<Vec<_>>(),
            })),
        }
    }
}

fn keyed(name: &str, value: impl Serialize) -> serde_json::Result<Value> {
    let mut object = Map::new();
    object.insert(name.to_owned(), serde_json::to_value(value)?);

    Ok(Value::Object(object))
}

impl CatalogPresenterPort for JsonPresenter {
    fn present(&self, view: CatalogView<'_>, out: &mut dyn Write) -> std::io::Result<()> {
        let value = Self::to_value(view)?;

        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)
    }
}
