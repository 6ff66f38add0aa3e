use std::{collections::BTreeMap, sync::LazyLock};

use serde::Serialize;
use tracing::{debug, error};

use crate::core::{
    catalog::{
        builtin,
        default_entry::DefaultStoreEntry,
        errors::CatalogError,
        fractal_definition::FractalDefinition,
        validation::validate,
    },
    fractals::fractal_kinds::FractalKinds,
};

/// The three lookup tables: menu configuration, default store and the
/// fractal enum, all keyed by fractal type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    menu_config: BTreeMap<FractalKinds, FractalDefinition>,
    default_store: BTreeMap<FractalKinds, DefaultStoreEntry>,
    fractal_enum: BTreeMap<FractalKinds, u32>,
}

static CATALOG: LazyLock<Result<Catalog, CatalogError>> = LazyLock::new(Catalog::load);

/// The process-wide catalog. Built and validated on first access.
pub fn catalog() -> Result<&'static Catalog, CatalogError> {
    CATALOG.as_ref().map_err(Clone::clone)
}

impl Catalog {
    #[must_use]
    pub fn from_tables(
        menu_config: BTreeMap<FractalKinds, FractalDefinition>,
        default_store: BTreeMap<FractalKinds, DefaultStoreEntry>,
        fractal_enum: BTreeMap<FractalKinds, u32>,
    ) -> Self {
        Self {
            menu_config,
            default_store,
            fractal_enum,
        }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::from_tables(
            builtin::menu_config(),
            builtin::default_store(),
            builtin::fractal_enum(),
        )
    }

    /// Builds the built-in catalog and rejects it if any invariant fails.
    pub fn load() -> Result<Self, CatalogError> {
        Self::builtin().validated()
    }

    pub fn validated(self) -> Result<Self, CatalogError> {
        let issues = validate(&self);

        if !issues.is_empty() {
            for issue in &issues {
                error!(fractal = %issue.fractal(), %issue, "catalog invariant violated");
            }
            return Err(CatalogError::InvalidCatalog { issues });
        }

        debug!(fractals = self.menu_config.len(), "fractal catalog loaded");
        Ok(self)
    }

    pub fn menu_config(&self, kind: FractalKinds) -> Result<&FractalDefinition, CatalogError> {
        self.menu_config.get(&kind).ok_or_else(|| unknown(kind))
    }

    pub fn defaults(&self, kind: FractalKinds) -> Result<&DefaultStoreEntry, CatalogError> {
        self.default_store.get(&kind).ok_or_else(|| unknown(kind))
    }

    pub fn enum_value(&self, kind: FractalKinds) -> Result<u32, CatalogError> {
        self.fractal_enum.get(&kind).copied().ok_or_else(|| unknown(kind))
    }

    /// Registered fractal types in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = FractalKinds> + '_ {
        self.fractal_enum.keys().copied()
    }

    #[must_use]
    pub fn menu_table(&self) -> &BTreeMap<FractalKinds, FractalDefinition> {
        &self.menu_config
    }

    #[must_use]
    pub fn store_table(&self) -> &BTreeMap<FractalKinds, DefaultStoreEntry> {
        &self.default_store
    }

    #[must_use]
    pub fn enum_table(&self) -> &BTreeMap<FractalKinds, u32> {
        &self.fractal_enum
    }
}

fn unknown(kind: FractalKinds) -> CatalogError {
    CatalogError::UnknownFractal {
        name: kind.display_name().to_owned(),
    }
}

pub fn get_menu_config(fractal_name: &str) -> Result<&'static FractalDefinition, CatalogError> {
    let kind = FractalKinds::from_name(fractal_name)?;
    catalog()?.menu_config(kind)
}

pub fn get_defaults(fractal_name: &str) -> Result<&'static DefaultStoreEntry, CatalogError> {
    let kind = FractalKinds::from_name(fractal_name)?;
    catalog()?.defaults(kind)
}

pub fn get_enum_value(fractal_name: &str) -> Result<u32, CatalogError> {
    let kind = FractalKinds::from_name(fractal_name)?;
    catalog()?.enum_value(kind)
}

/// All registered fractal names in declaration order.
#[must_use]
pub fn list_fractal_names() -> Vec<&'static str> {
    FractalKinds::ALL
        .iter()
        .map(|kind| kind.display_name())
        .collect()
}
