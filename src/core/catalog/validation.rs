use std::collections::{BTreeMap, BTreeSet};

use crate::core::{
    catalog::{
        default_entry::DefaultStoreEntry,
        errors::{CatalogTable, ValidationIssue},
        fractal_catalog::Catalog,
        fractal_definition::FractalDefinition,
    },
    controls::control_spec::ControlSpec,
    fractals::fractal_kinds::FractalKinds,
};

/// Checks every cross-table invariant and returns all violations found.
#[must_use]
pub fn validate(catalog: &Catalog) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for &fractal in FractalKinds::ALL {
        let definition = catalog.menu_table().get(&fractal);
        let defaults = catalog.store_table().get(&fractal);

        if definition.is_none() {
            issues.push(ValidationIssue::MissingEntry {
                table: CatalogTable::MenuConfig,
                fractal,
            });
        }
        if defaults.is_none() {
            issues.push(ValidationIssue::MissingEntry {
                table: CatalogTable::DefaultStore,
                fractal,
            });
        }
        if !catalog.enum_table().contains_key(&fractal) {
            issues.push(ValidationIssue::MissingEntry {
                table: CatalogTable::FractalEnum,
                fractal,
            });
        }

        if let Some(definition) = definition {
            check_definition(fractal, definition, &mut issues);

            if let Some(defaults) = defaults {
                check_defaults(fractal, definition, defaults, &mut issues);
            }
        }
    }

    check_enum(catalog.enum_table(), &mut issues);

    issues
}

fn check_definition(
    fractal: FractalKinds,
    definition: &FractalDefinition,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut seen = BTreeSet::new();

    for parameter in &definition.menu_order {
        if !seen.insert(parameter.as_str()) {
            issues.push(ValidationIssue::DuplicateMenuEntry {
                fractal,
                parameter: parameter.clone(),
            });
        }
        if !definition.controls.contains_key(parameter) {
            issues.push(ValidationIssue::MenuEntryWithoutControl {
                fractal,
                parameter: parameter.clone(),
            });
        }
    }

    for (parameter, control) in &definition.controls {
        if !seen.contains(parameter.as_str()) {
            issues.push(ValidationIssue::ControlNotInMenu {
                fractal,
                parameter: parameter.clone(),
            });
        }

        match control {
            ControlSpec::Range { min, max } => {
                if !(min.is_finite() && max.is_finite() && min <= max) {
                    issues.push(ValidationIssue::InvalidRange {
                        fractal,
                        parameter: parameter.clone(),
                        min: *min,
                        max: *max,
                    });
                }
            }
            ControlSpec::Select { options } => {
                if options.is_empty() {
                    issues.push(ValidationIssue::EmptySelect {
                        fractal,
                        parameter: parameter.clone(),
                    });
                }
            }
        }
    }
}

fn check_defaults(
    fractal: FractalKinds,
    definition: &FractalDefinition,
    defaults: &DefaultStoreEntry,
    issues: &mut Vec<ValidationIssue>,
) {
    for (parameter, value) in &defaults.config {
        match definition.control(parameter) {
            None => issues.push(ValidationIssue::DefaultWithoutControl {
                fractal,
                parameter: parameter.clone(),
            }),
            Some(control) if !control.accepts(*value) => {
                issues.push(ValidationIssue::DefaultOutOfBounds {
                    fractal,
                    parameter: parameter.clone(),
                    value: *value,
                });
            }
            Some(_) => {}
        }
    }

    if let Err(source) = defaults.viewport.check() {
        issues.push(ValidationIssue::InvalidViewport { fractal, source });
    }
}

fn check_enum(fractal_enum: &BTreeMap<FractalKinds, u32>, issues: &mut Vec<ValidationIssue>) {
    let mut owners: BTreeMap<u32, FractalKinds> = BTreeMap::new();

    for (&fractal, &value) in fractal_enum {
        if value != fractal.enum_value() {
            issues.push(ValidationIssue::EnumValueMismatch {
                fractal,
                value,
                expected: fractal.enum_value(),
            });
        }

        if let Some(&other) = owners.get(&value) {
            issues.push(ValidationIssue::DuplicateEnumValue {
                fractal,
                other,
                value,
            });
        } else {
            owners.insert(value, fractal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        catalog::builtin,
        controls::select_options::SelectOptions,
        data::{point::Point, viewport::ViewportError},
    };

    fn builtin_catalog() -> Catalog {
        Catalog::from_tables(
            builtin::menu_config(),
            builtin::default_store(),
            builtin::fractal_enum(),
        )
    }

    #[test]
    fn builtin_catalog_is_valid() {
        assert_eq!(validate(&builtin_catalog()), vec![]);
    }

    #[test]
    fn reports_missing_entries_per_table() {
        let mut store = builtin::default_store();
        store.remove(&FractalKinds::BoxThing);
        let mut fractal_enum = builtin::fractal_enum();
        fractal_enum.remove(&FractalKinds::JuliaSet);

        let catalog = Catalog::from_tables(builtin::menu_config(), store, fractal_enum);

        assert_eq!(
            validate(&catalog),
            vec![
                ValidationIssue::MissingEntry {
                    table: CatalogTable::FractalEnum,
                    fractal: FractalKinds::JuliaSet,
                },
                ValidationIssue::MissingEntry {
                    table: CatalogTable::DefaultStore,
                    fractal: FractalKinds::BoxThing,
                },
            ]
        );
    }

    #[test]
    fn reports_menu_and_control_mismatches() {
        let mut menu = builtin::menu_config();
        let julia = menu.get_mut(&FractalKinds::JuliaSet).unwrap();
        julia.menu_order.retain(|parameter| parameter != "speed");
        julia.menu_order.push("colorset".to_owned());
        julia.menu_order.push("zoom".to_owned());

        let catalog = Catalog::from_tables(menu, builtin::default_store(), builtin::fractal_enum());

        assert_eq!(
            validate(&catalog),
            vec![
                ValidationIssue::DuplicateMenuEntry {
                    fractal: FractalKinds::JuliaSet,
                    parameter: "colorset".to_owned(),
                },
                ValidationIssue::MenuEntryWithoutControl {
                    fractal: FractalKinds::JuliaSet,
                    parameter: "zoom".to_owned(),
                },
                ValidationIssue::ControlNotInMenu {
                    fractal: FractalKinds::JuliaSet,
                    parameter: "speed".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn reports_bad_controls() {
        let mut menu = builtin::menu_config();
        let collatz = menu.get_mut(&FractalKinds::ModifiedCollatz).unwrap();
        collatz
            .controls
            .insert("depth".to_owned(), ControlSpec::range(800.0, 1.0));
        collatz.controls.insert(
            "supersamples".to_owned(),
            ControlSpec::select(SelectOptions::indexed(Vec::<String>::new())),
        );

        let catalog = Catalog::from_tables(menu, builtin::default_store(), builtin::fractal_enum());
        let issues = validate(&catalog);

        assert!(issues.contains(&ValidationIssue::InvalidRange {
            fractal: FractalKinds::ModifiedCollatz,
            parameter: "depth".to_owned(),
            min: 800.0,
            max: 1.0,
        }));
        assert!(issues.contains(&ValidationIssue::EmptySelect {
            fractal: FractalKinds::ModifiedCollatz,
            parameter: "supersamples".to_owned(),
        }));
    }

    #[test]
    fn reports_bad_defaults() {
        let mut store = builtin::default_store();
        let julia = store.get_mut(&FractalKinds::JuliaSet).unwrap();
        julia.config.insert("brightness".to_owned(), 9.0);
        julia.config.insert("supersamples".to_owned(), 2.0);
        julia.config.insert("depth".to_owned(), 200.0);
        store.get_mut(&FractalKinds::BoxThing).unwrap().viewport.range = Point::new(0.0, 1.0);

        let catalog = Catalog::from_tables(builtin::menu_config(), store, builtin::fractal_enum());

        assert_eq!(
            validate(&catalog),
            vec![
                ValidationIssue::DefaultOutOfBounds {
                    fractal: FractalKinds::JuliaSet,
                    parameter: "brightness".to_owned(),
                    value: 9.0,
                },
                ValidationIssue::DefaultWithoutControl {
                    fractal: FractalKinds::JuliaSet,
                    parameter: "depth".to_owned(),
                },
                ValidationIssue::DefaultOutOfBounds {
                    fractal: FractalKinds::JuliaSet,
                    parameter: "supersamples".to_owned(),
                    value: 2.0,
                },
                ValidationIssue::InvalidViewport {
                    fractal: FractalKinds::BoxThing,
                    source: ViewportError::InvalidRange { x: 0.0, y: 1.0 },
                },
            ]
        );
    }

    #[test]
    fn reports_enum_collisions() {
        let mut fractal_enum = builtin::fractal_enum();
        fractal_enum.insert(FractalKinds::BoxThing, 1);

        let catalog =
            Catalog::from_tables(builtin::menu_config(), builtin::default_store(), fractal_enum);

        assert_eq!(
            validate(&catalog),
            vec![
                ValidationIssue::EnumValueMismatch {
                    fractal: FractalKinds::BoxThing,
                    value: 1,
                    expected: 4,
                },
                ValidationIssue::DuplicateEnumValue {
                    fractal: FractalKinds::BoxThing,
                    other: FractalKinds::MandelbrotSet,
                    value: 1,
                },
            ]
        );
    }
}
