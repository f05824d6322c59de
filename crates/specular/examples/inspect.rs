// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dump a registered type's fields and attributes.
//!
//! Run with: cargo run --example inspect

use specular::{
    field_count, for_each_field, for_each_field_meta, reflect_fields, Field, FieldVisitor,
    MetaVisitor, Reflect,
};

struct Doc(&'static str);
struct Unit(&'static str);

struct Reading {
    sensor_id: u32,
    celsius: f64,
    healthy: bool,
}

reflect_fields!(Reading {
    sensor_id: u32 [Doc("stable across reboots")],
    celsius: f64 [Unit("degC"), Doc("calibrated")],
    healthy: bool,
});

/// Prints one line per field: name, attributes, current value.
struct Dump;

impl<C> FieldVisitor<C, u32> for Dump {
    fn visit(&mut self, name: &'static str, value: &mut u32) {
        println!("  {name} = {value}");
    }
}

impl<C> FieldVisitor<C, f64> for Dump {
    fn visit(&mut self, name: &'static str, value: &mut f64) {
        println!("  {name} = {value}");
    }
}

impl<C> FieldVisitor<C, bool> for Dump {
    fn visit(&mut self, name: &'static str, value: &mut bool) {
        println!("  {name} = {value}");
    }
}

/// Metadata-only walk that renders the attribute bundle per field.
struct Schema;

impl<C, T> MetaVisitor<C, T> for Schema {
    fn visit(&mut self, name: &'static str) {
        println!("  {name}");
    }

    fn visit_field(&mut self, name: &'static str, field: &Field<C, T>) {
        let unit = field.attr::<Unit>().map_or("-", |u| u.0);
        let doc = field.attr::<Doc>().map_or("", |d| d.0);
        println!("  {name:<10} unit={unit:<5} {doc}");
    }
}

fn main() {
    println!(
        "{} ({} fields)",
        Reading::TYPE_NAME,
        field_count::<Reading>()
    );

    println!("schema:");
    let mut schema = Schema;
    for_each_field_meta::<Reading, _>(&mut schema);

    let mut reading = Reading {
        sensor_id: 42,
        celsius: 21.5,
        healthy: true,
    };
    println!("values:");
    let mut dump = Dump;
    for_each_field(&mut reading, &mut dump);
}
