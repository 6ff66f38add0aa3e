use std::{
    collections::BTreeMap,
    f64::consts::{PI, TAU},
};

use crate::core::{
    catalog::{default_entry::DefaultStoreEntry, fractal_definition::FractalDefinition},
    controls::{control_spec::ControlSpec, select_options::SelectOptions},
    data::point::Point,
    fractals::fractal_kinds::FractalKinds,
};

fn colorset() -> ControlSpec {
    ControlSpec::select(SelectOptions::indexed(["linear", "squared periodic"]))
}

fn supersamples() -> ControlSpec {
    ControlSpec::select(SelectOptions::keyed([(1, "1x"), (4, "4x"), (16, "16x")]))
}

// mandelbrot set and burning ship share a schema
fn escape_time_definition() -> FractalDefinition {
    FractalDefinition::new(
        ["colorset", "brightness", "exponent", "supersamples"],
        [
            ("brightness", ControlSpec::range(1.0, 8.0)),
            ("exponent", ControlSpec::range(0.0, 10.0)),
            ("colorset", colorset()),
            ("supersamples", supersamples()),
        ],
    )
}

fn escape_time_defaults() -> DefaultStoreEntry {
    DefaultStoreEntry::new(
        [
            ("brightness", 4.0),
            ("colorset", 0.0),
            ("exponent", 2.0),
            ("supersamples", 1.0),
        ],
        Point::new(0.0, 0.0),
        Point::new(4.0, 4.0),
    )
}

#[must_use]
pub fn menu_config() -> BTreeMap<FractalKinds, FractalDefinition> {
    BTreeMap::from([
        (
            FractalKinds::JuliaSet,
            FractalDefinition::new(
                ["colorset", "brightness", "speed", "exponent", "supersamples"],
                [
                    ("brightness", ControlSpec::range(1.0, 8.0)),
                    ("colorset", colorset()),
                    ("exponent", ControlSpec::range(0.0, 10.0)),
                    ("speed", ControlSpec::range(0.0, 320.0)),
                    ("supersamples", supersamples()),
                ],
            ),
        ),
        (FractalKinds::MandelbrotSet, escape_time_definition()),
        (FractalKinds::BurningShip, escape_time_definition()),
        (
            FractalKinds::ModifiedCollatz,
            FractalDefinition::new(
                ["depth", "constant_1", "angle1", "angle2", "supersamples"],
                [
                    ("depth", ControlSpec::range(1.0, 800.0)),
                    ("constant_1", ControlSpec::range(1.0, 10.0)),
                    ("angle1", ControlSpec::range(0.0, TAU)),
                    ("angle2", ControlSpec::range(0.0, TAU)),
                    ("supersamples", supersamples()),
                ],
            ),
        ),
        (
            FractalKinds::BoxThing,
            FractalDefinition::new(
                ["rotation"],
                [("rotation", ControlSpec::range(0.0, 3.0 * PI))],
            ),
        ),
    ])
}

#[must_use]
pub fn default_store() -> BTreeMap<FractalKinds, DefaultStoreEntry> {
    BTreeMap::from([
        (
            FractalKinds::JuliaSet,
            DefaultStoreEntry::new(
                [
                    ("brightness", 4.0),
                    ("colorset", 0.0),
                    ("exponent", 2.0),
                    ("speed", 16.0),
                    ("supersamples", 1.0),
                ],
                Point::new(0.0, 0.0),
                Point::new(4.0, 4.0),
            ),
        ),
        (FractalKinds::MandelbrotSet, escape_time_defaults()),
        (FractalKinds::BurningShip, escape_time_defaults()),
        (
            FractalKinds::ModifiedCollatz,
            // supersamples has no default here
            DefaultStoreEntry::new(
                [
                    ("depth", 200.0),
                    ("constant_1", 4.0),
                    ("angle1", PI),
                    ("angle2", PI),
                ],
                Point::new(0.0, 0.0),
                Point::new(100.0, 100.0),
            ),
        ),
        (
            FractalKinds::BoxThing,
            DefaultStoreEntry::new(
                [("rotation", 0.0)],
                Point::new(0.25, 0.25),
                Point::new(1.0, 1.0),
            ),
        ),
    ])
}

#[must_use]
pub fn fractal_enum() -> BTreeMap<FractalKinds, u32> {
    FractalKinds::ALL
        .iter()
        .map(|kind| (*kind, kind.enum_value()))
        .collect()
}
