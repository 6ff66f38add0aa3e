use std::io::Write;

use crate::core::{
    catalog::{
        default_entry::DefaultStoreEntry, errors::ValidationIssue,
        fractal_catalog::Catalog, fractal_definition::FractalDefinition,
    },
    fractals::fractal_kinds::FractalKinds,
};

/// What the CLI asked to see.
#[derive(Debug, Clone, Copy)]
pub enum CatalogView<'a> {
    Names(&'a [(FractalKinds, u32)]),
    Menu {
        kind: FractalKinds,
        definition: &'a FractalDefinition,
    },
    Defaults {
        kind: FractalKinds,
        entry: &'a DefaultStoreEntry,
    },
    EnumValue {
        kind: FractalKinds,
        value: u32,
    },
    Catalog(&'a Catalog),
    Validation(&'a [ValidationIssue]),
}

pub trait CatalogPresenterPort {
    fn present(&self, view: CatalogView<'_>, out: &mut dyn Write) -> std::io::Result<()>;
}
