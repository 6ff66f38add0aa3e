use std::collections::{BTreeMap, btree_map::Entry};

use tracing::{debug, warn};

use crate::core::{
    catalog::{
        default_entry::DefaultStoreEntry,
        errors::CatalogError,
        fractal_catalog::{Catalog, catalog},
    },
    controls::control_spec::ControlSpec,
    data::viewport::Viewport,
    fractals::fractal_kinds::FractalKinds,
    session::errors::SessionError,
};

/// Per-session parameter values, seeded from the catalog's default store.
///
/// Reads fall through to the shared defaults until a fractal is edited; the
/// first edit copies that fractal's defaults into the session. The catalog
/// itself is never written.
#[derive(Debug, Clone)]
pub struct SessionStore<'c> {
    catalog: &'c Catalog,
    overrides: BTreeMap<FractalKinds, DefaultStoreEntry>,
}

impl SessionStore<'static> {
    pub fn new() -> Result<Self, CatalogError> {
        Ok(Self::with_catalog(catalog()?))
    }
}

impl<'c> SessionStore<'c> {
    #[must_use]
    pub fn with_catalog(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            overrides: BTreeMap::new(),
        }
    }

    pub fn entry(&self, kind: FractalKinds) -> Result<&DefaultStoreEntry, SessionError> {
        match self.overrides.get(&kind) {
            Some(entry) => Ok(entry),
            None => Ok(self.catalog.defaults(kind)?),
        }
    }

    pub fn value(&self, kind: FractalKinds, parameter: &str) -> Result<Option<f64>, SessionError> {
        Ok(self.entry(kind)?.value(parameter))
    }

    pub fn viewport(&self, kind: FractalKinds) -> Result<Viewport, SessionError> {
        Ok(self.entry(kind)?.viewport)
    }

    pub fn set_value(
        &mut self,
        kind: FractalKinds,
        parameter: &str,
        value: f64,
    ) -> Result<(), SessionError> {
        let control = self
            .catalog
            .menu_config(kind)?
            .control(parameter)
            .ok_or_else(|| SessionError::UnknownParameter {
                fractal: kind,
                parameter: parameter.to_owned(),
            })?;

        if !control.accepts(value) {
            let error = rejection(kind, parameter, value, control);
            warn!(fractal = %kind, parameter, value, "rejected session edit");
            return Err(error);
        }

        self.entry_mut(kind)?
            .config
            .insert(parameter.to_owned(), value);
        debug!(fractal = %kind, parameter, value, "session value updated");

        Ok(())
    }

    pub fn set_viewport(
        &mut self,
        kind: FractalKinds,
        viewport: Viewport,
    ) -> Result<(), SessionError> {
        viewport
            .check()
            .map_err(|source| SessionError::InvalidViewport {
                fractal: kind,
                source,
            })?;

        self.entry_mut(kind)?.viewport = viewport;
        debug!(fractal = %kind, ?viewport, "session viewport updated");

        Ok(())
    }

    /// Drops the session's edits for `kind`. Returns whether there were any.
    pub fn reset(&mut self, kind: FractalKinds) -> bool {
        self.overrides.remove(&kind).is_some()
    }

    pub fn reset_all(&mut self) {
        self.overrides.clear();
    }

    #[must_use]
    pub fn is_customized(&self, kind: FractalKinds) -> bool {
        self.overrides.contains_key(&kind)
    }

    /// Fractals edited in this session, with their current values.
    pub fn customized(&self) -> impl Iterator<Item = (FractalKinds, &DefaultStoreEntry)> {
        self.overrides.iter().map(|(kind, entry)| (*kind, entry))
    }

    fn entry_mut(&mut self, kind: FractalKinds) -> Result<&mut DefaultStoreEntry, SessionError> {
        match self.overrides.entry(kind) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let defaults = self.catalog.defaults(kind)?.clone();
                Ok(entry.insert(defaults))
            }
        }
    }
}

fn rejection(
    kind: FractalKinds,
    parameter: &str,
    value: f64,
    control: &ControlSpec,
) -> SessionError {
    match control {
        ControlSpec::Range { min, max } => SessionError::OutOfRange {
            fractal: kind,
            parameter: parameter.to_owned(),
            value,
            min: *min,
            max: *max,
        },
        ControlSpec::Select { .. } => SessionError::InvalidOption {
            fractal: kind,
            parameter: parameter.to_owned(),
            value,
        },
    }
}
