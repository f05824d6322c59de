// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Attribute bundles: typed retrieval, ordering, and visitor-side use.

use specular::{fields_of, for_each_field_meta, reflect_fields, Field, MetaVisitor};

#[derive(Debug, PartialEq)]
struct Doc(&'static str);

#[derive(Debug, PartialEq)]
struct Unit(&'static str);

#[derive(Debug, PartialEq)]
struct Range {
    min: i64,
    max: i64,
}

struct Telemetry {
    battery: u8,
    heading: f32,
    uptime: u64,
}

reflect_fields!(Telemetry {
    battery: u8 [Range { min: 0, max: 100 }, Unit("%"), Doc("state of charge")],
    heading: f32 [Unit("deg")],
    uptime: u64,
});

#[test]
fn test_attr_roundtrip_by_kind() {
    let (battery, heading, uptime) = fields_of::<Telemetry>();

    assert_eq!(battery.attr::<Range>(), Some(&Range { min: 0, max: 100 }));
    assert_eq!(battery.attr::<Unit>(), Some(&Unit("%")));
    assert_eq!(battery.attr::<Doc>(), Some(&Doc("state of charge")));

    assert_eq!(heading.attr::<Unit>(), Some(&Unit("deg")));
    assert_eq!(heading.attr::<Range>(), None);

    assert_eq!(uptime.attr_count(), 0);
}

#[test]
fn test_attr_bundle_preserves_declared_order() {
    let (battery, ..) = fields_of::<Telemetry>();
    let kinds: Vec<&'static str> = battery
        .attrs()
        .iter()
        .map(|a| {
            if a.downcast_ref::<Range>().is_some() {
                "range"
            } else if a.downcast_ref::<Unit>().is_some() {
                "unit"
            } else {
                "doc"
            }
        })
        .collect();
    assert_eq!(kinds, vec!["range", "unit", "doc"]);
}

#[test]
fn test_attrs_drive_metadata_visitors() {
    // Collect only the fields that declare a unit.
    #[derive(Default)]
    struct Units(Vec<(&'static str, &'static str)>);
    impl<C, T> MetaVisitor<C, T> for Units {
        fn visit(&mut self, _name: &'static str) {}
        fn visit_field(&mut self, name: &'static str, field: &Field<C, T>) {
            if let Some(unit) = field.attr::<Unit>() {
                self.0.push((name, unit.0));
            }
        }
    }

    let mut units = Units::default();
    for_each_field_meta::<Telemetry, _>(&mut units);
    assert_eq!(units.0, vec![("battery", "%"), ("heading", "deg")]);
}
