use std::io::Write;

use crate::{
    controllers::ports::catalog_presenter::{CatalogPresenterPort, CatalogView},
    core::{
        catalog::{default_entry::DefaultStoreEntry, fractal_definition::FractalDefinition},
        controls::control_spec::ControlSpec,
        fractals::fractal_kinds::FractalKinds,
    },
};

/// Plain text output for terminals.
#[derive(Debug, Default)]
pub struct TextPresenter {}

impl TextPresenter {
    pub fn new() -> Self {
        Self {}
    }
}

impl CatalogPresenterPort for TextPresenter {
    fn present(&self, view: CatalogView<'_>, out: &mut dyn Write) -> std::io::Result<()> {
        match view {
            CatalogView::Names(names) => {
                for (kind, value) in names {
                    writeln!(out, "{value}  {kind}")?;
                }
            }
            CatalogView::Menu { kind, definition } => write_menu(out, kind, definition)?,
            CatalogView::Defaults { kind, entry } => write_defaults(out, kind, entry)?,
            CatalogView::EnumValue { kind, value } => writeln!(out, "{kind} = {value}")?,
            CatalogView::Catalog(catalog) => {
                for kind in catalog.kinds() {
                    let value = catalog.enum_value(kind).map_err(std::io::Error::other)?;
                    writeln!(out, "[{value}] {kind}")?;

                    if let Ok(definition) = catalog.menu_config(kind) {
                        write_controls(out, definition)?;
                    }
                    if let Ok(entry) = catalog.defaults(kind) {
                        write_config(out, entry)?;
                    }
                }
            }
            CatalogView::Validation(issues) => {
                if issues.is_empty() {
                    writeln!(out, "catalog ok")?;
                }
                for issue in issues {
                    writeln!(out, "error: {issue}")?;
                }
            }
        }

        Ok(())
    }
}

fn write_menu(
    out: &mut dyn Write,
    kind: FractalKinds,
    definition: &FractalDefinition,
) -> std::io::Result<()> {
    writeln!(out, "{kind}")?;
    write_controls(out, definition)
}

fn write_controls(out: &mut dyn Write, definition: &FractalDefinition) -> std::io::Result<()> {
    for (parameter, control) in definition.ordered_controls() {
        match control {
            ControlSpec::Range { min, max } => {
                writeln!(out, "  {parameter:<14}range   {min} .. {max}")?;
            }
            ControlSpec::Select { options } => {
                let choices: Vec<String> = options
                    .choices()
                    .into_iter()
                    .map(|(value, label)| format!("[{value}] {label}"))
                    .collect();
                writeln!(out, "  {parameter:<14}select  {}", choices.join(", "))?;
            }
        }
    }

    Ok(())
}

fn write_defaults(
    out: &mut dyn Write,
    kind: FractalKinds,
    entry: &DefaultStoreEntry,
) -> std::io::Result<()> {
    writeln!(out, "{kind}")?;
    write_config(out, entry)
}

fn write_config(out: &mut dyn Write, entry: &DefaultStoreEntry) -> std::io::Result<()> {
    for (parameter, value) in &entry.config {
        writeln!(out, "  {parameter} = {value}")?;
    }

    let viewport = entry.viewport;
    writeln!(
        out,
        "  viewport center ({}, {}) range ({}, {})",
        viewport.center.x, viewport.center.y, viewport.range.x, viewport.range.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        catalog::{
            errors::ValidationIssue,
            fractal_catalog::{catalog, get_defaults, get_menu_config},
        },
        data::viewport::ViewportError,
    };

    fn render(view: CatalogView<'_>) -> String {
        let mut out = Vec::new();
        TextPresenter::new().present(view, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn names_list_enum_value_first() {
        let names = [(FractalKinds::JuliaSet, 0), (FractalKinds::BoxThing, 4)];

        assert_eq!(render(CatalogView::Names(&names)), "0  julia set\n4  box thing\n");
    }

    #[test]
    fn menu_follows_menu_order() {
        let output = render(CatalogView::Menu {
            kind: FractalKinds::MandelbrotSet,
            definition: get_menu_config("mandelbrot set").unwrap(),
        });

        assert_eq!(
            output,
            "mandelbrot set\n\
             \x20 colorset      select  [0] linear, [1] squared periodic\n\
             \x20 brightness    range   1 .. 8\n\
             \x20 exponent      range   0 .. 10\n\
             \x20 supersamples  select  [1] 1x, [4] 4x, [16] 16x\n"
        );
    }

    #[test]
    fn defaults_include_viewport() {
        let output = render(CatalogView::Defaults {
            kind: FractalKinds::BoxThing,
            entry: get_defaults("box thing").unwrap(),
        });

        assert_eq!(
            output,
            "box thing\n  rotation = 0\n  viewport center (0.25, 0.25) range (1, 1)\n"
        );
    }

    #[test]
    fn enum_value_line() {
        let output = render(CatalogView::EnumValue {
            kind: FractalKinds::MandelbrotSet,
            value: 1,
        });

        assert_eq!(output, "mandelbrot set = 1\n");
    }

    #[test]
    fn whole_catalog_lists_every_fractal() {
        let output = render(CatalogView::Catalog(catalog().unwrap()));

        for kind in FractalKinds::ALL {
            assert!(
                output.contains(&format!("[{}] {kind}\n", kind.enum_value())),
                "{kind} missing"
            );
        }
    }

    #[test]
    fn validation_reports() {
        let issues = [ValidationIssue::InvalidViewport {
            fractal: FractalKinds::BoxThing,
            source: ViewportError::InvalidRange { x: 0.0, y: 1.0 },
        }];

        assert_eq!(render(CatalogView::Validation(&[])), "catalog ok\n");
        assert_eq!(
            render(CatalogView::Validation(&issues)),
            "error: box thing: viewport range must be positive: 0x1\n"
        );
    }
}
