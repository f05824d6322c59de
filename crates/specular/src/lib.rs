// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # Specular - Static field reflection
//!
//! Zero-cost, compile-time field reflection for Rust structs. A type opts in
//! by declaring its field sequence once; generic code can then enumerate the
//! fields - and arbitrary metadata attached to each field - with every lookup
//! and dispatch resolved at compile time. The runtime artifact is a flat,
//! fully inlined sequence of visitor calls.
//!
//! ## Quick Start
//!
//! ```rust
//! use specular::{for_each_field, reflect_fields, FieldVisitor};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Register the field sequence (the sole way a type becomes reflectable)
//! reflect_fields!(Point {
//!     x: i32,
//!     y: i32,
//! });
//!
//! // A visitor for i32 fields of any owning type
//! struct Printer;
//! impl<C> FieldVisitor<C, i32> for Printer {
//!     fn visit(&mut self, name: &'static str, value: &mut i32) {
//!         println!("{name} = {value}");
//!     }
//! }
//!
//! let mut p = Point { x: 3, y: 4 };
//! let mut printer = Printer;
//! for_each_field(&mut p, &mut printer); // prints "x = 3" then "y = 4"
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +--------------------------------------------------------------+
//! |                    Consumer visitor code                     |
//! |        FieldVisitor<C, T>  /  MetaVisitor<C, T> impls        |
//! +--------------------------------------------------------------+
//! |                     Iteration engine                         |
//! |   for_each_field / for_each_field_meta -> unrolled calls     |
//! +--------------------------------------------------------------+
//! |                    Descriptor registry                       |
//! |   Reflect: FIELDS tuple, FIELD_COUNT, qualifier collapsing   |
//! +--------------------------------------------------------------+
//! |                   Field descriptor model                     |
//! |       Field<C, T>: name, accessor, attribute bundle          |
//! +--------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Field`] | Descriptor of one field: name, accessor, attributes |
//! | [`Reflect`] | Per-type registry of the declared field sequence |
//! | [`FieldVisitor`] | Visitor contract for enumeration with a live instance |
//! | [`MetaVisitor`] | Visitor contract for metadata-only enumeration |
//! | [`reflect_fields!`] | Registration point: declares a type's field sequence |
//!
//! ## Features
//!
//! - `logging` - emit `log::trace!` records from the two entry points.
//!   Disabled by default; when disabled the crate has zero dependencies and
//!   the entry points compile to plain calls with no logging cost.
//!
//! ## Guarantees
//!
//! - Iteration order equals declared order, every field exactly once.
//! - No heap allocation anywhere: descriptors are `const` items.
//! - Every misuse this crate can detect is a compile-time rejection:
//!   accessor/owner mismatches, non-const attribute expressions, enumeration
//!   of unregistered types, visitors that cannot accept some field's type.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod field;
mod macros;
mod reflect;
mod visit;

pub use field::{Field, FieldAttrs};
pub use reflect::{field_count, fields_of, Reflect};
pub use visit::{
    for_each_field, for_each_field_meta, FieldVisitor, MetaVisitor, VisitFields, VisitMeta,
};
