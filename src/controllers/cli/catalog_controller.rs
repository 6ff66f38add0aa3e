use std::io::Write;

use thiserror::Error;
use tracing::info;

use crate::{
    controllers::{
        cli::args::Commands,
        ports::catalog_presenter::{CatalogPresenterPort, CatalogView},
    },
    core::{
        catalog::{
            errors::CatalogError,
            fractal_catalog::{Catalog, catalog},
            validation::validate,
        },
        fractals::fractal_kinds::FractalKinds,
    },
};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub struct CatalogController<P: CatalogPresenterPort> {
    presenter: P,
}

impl<P: CatalogPresenterPort> CatalogController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn run(&self, command: &Commands, out: &mut dyn Write) -> Result<(), CliError> {
        match command {
            Commands::List => self.list(out),
            Commands::Menu { name } => self.menu(name, out),
            Commands::Defaults { name } => self.defaults(name, out),
            Commands::Enum { name } => self.enum_value(name, out),
            Commands::Dump => self.dump(out),
            Commands::Validate => self.validate(out),
        }
    }

    pub fn list(&self, out: &mut dyn Write) -> Result<(), CliError> {
        let catalog = catalog()?;
        let names = catalog
            .kinds()
            .map(|kind| Ok((kind, catalog.enum_value(kind)?)))
            .collect::<Result<Vec<_>, CatalogError>>()?;

        self.presenter.present(CatalogView::Names(&names), out)?;
        Ok(())
    }

    pub fn menu(&self, name: &str, out: &mut dyn Write) -> Result<(), CliError> {
        let kind = FractalKinds::from_name(name)?;
        let definition = catalog()?.menu_config(kind)?;

        self.presenter
            .present(CatalogView::Menu { kind, definition }, out)?;
        Ok(())
    }

    pub fn defaults(&self, name: &str, out: &mut dyn Write) -> Result<(), CliError> {
        let kind = FractalKinds::from_name(name)?;
        let entry = catalog()?.defaults(kind)?;

        self.presenter
            .present(CatalogView::Defaults { kind, entry }, out)?;
        Ok(())
    }

    pub fn enum_value(&self, name: &str, out: &mut dyn Write) -> Result<(), CliError> {
        let kind = FractalKinds::from_name(name)?;
        let value = catalog()?.enum_value(kind)?;

        self.presenter
            .present(CatalogView::EnumValue { kind, value }, out)?;
        Ok(())
    }

    pub fn dump(&self, out: &mut dyn Write) -> Result<(), CliError> {
        self.presenter.present(CatalogView::Catalog(catalog()?), out)?;
        Ok(())
    }

    /// Reports every violated invariant of the built-in tables. Fails when
    /// there is at least one.
    pub fn validate(&self, out: &mut dyn Write) -> Result<(), CliError> {
        let issues = validate(&Catalog::builtin());

        self.presenter
            .present(CatalogView::Validation(&issues), out)?;

        if !issues.is_empty() {
            return Err(CatalogError::InvalidCatalog { issues }.into());
        }

        info!(fractals = FractalKinds::ALL.len(), "catalog invariants hold");
        Ok(())
    }
}
