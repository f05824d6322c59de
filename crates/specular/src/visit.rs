// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field iteration engine: drive a visitor across a type's field sequence.
//!
//! Two entry points:
//!
//! - [`for_each_field`] walks a live instance, handing the visitor each
//!   field's name and a mutable reference to its storage.
//! - [`for_each_field_meta`] walks the metadata alone, no instance needed.
//!
//! Both select the visitor call shape per field at compile time: the engine
//! always calls the descriptor-taking method, whose default body falls back
//! to the narrow shape. A visitor that overrides the rich method receives
//! the [`Field`] descriptor; one that does not pays nothing for it. The
//! traits are parameterized by `(owner, field type)`, so the selection is
//! made independently for every field and there is no runtime branch.
//!
//! Iteration is strictly sequential in declared order, visits every field
//! exactly once, and offers no early termination, skipping, or reordering.

use crate::field::Field;
use crate::reflect::Reflect;

/// Visitor contract for enumeration with a live instance.
///
/// Implement [`visit`](Self::visit) to receive `(name, value)`; additionally
/// override [`visit_field`](Self::visit_field) to receive the descriptor and
/// its attributes. A visitor missing an impl for some field's type rejects
/// the whole enumeration at compile time:
///
/// ```compile_fail
/// use specular::{for_each_field, reflect_fields, FieldVisitor};
///
/// struct Reading {
///     raw: u32,
///     label: String,
/// }
///
/// reflect_fields!(Reading { raw: u32, label: String });
///
/// struct OnlyU32;
/// impl<C> FieldVisitor<C, u32> for OnlyU32 {
///     fn visit(&mut self, _name: &'static str, _value: &mut u32) {}
/// }
///
/// let mut r = Reading { raw: 0, label: String::new() };
/// let mut v = OnlyU32;
/// for_each_field(&mut r, &mut v); // no FieldVisitor<Reading, String> impl
/// ```
pub trait FieldVisitor<C, T> {
    /// Narrow shape: field name and mutable field storage.
    fn visit(&mut self, name: &'static str, value: &mut T);

    /// Rich shape: name, storage, and the field's descriptor.
    ///
    /// Default body forwards to [`visit`](Self::visit); override to accept
    /// the descriptor.
    #[inline]
    fn visit_field(&mut self, name: &'static str, value: &mut T, field: &Field<C, T>) {
        let _ = field;
        self.visit(name, value);
    }
}

/// Visitor contract for metadata-only enumeration.
///
/// Same shape-selection rule as [`FieldVisitor`], minus the instance.
pub trait MetaVisitor<C, T> {
    /// Narrow shape: field name only.
    fn visit(&mut self, name: &'static str);

    /// Rich shape: name plus the field's descriptor.
    #[inline]
    fn visit_field(&mut self, name: &'static str, field: &Field<C, T>) {
        let _ = field;
        self.visit(name);
    }
}

/// Types whose field sequence can be driven against visitor `V` with a live
/// instance. Implemented by [`reflect_fields!`](crate::reflect_fields) as a
/// fully unrolled call sequence; the bound on `V` names every declared field
/// type.
pub trait VisitFields<V>: Reflect {
    /// Invoke `visitor` once per field, in declared order.
    fn visit_fields(&mut self, visitor: &mut V);
}

/// Types whose field metadata can be driven against visitor `V` without an
/// instance. Implemented by [`reflect_fields!`](crate::reflect_fields).
pub trait VisitMeta<V>: Reflect {
    /// Invoke `visitor` once per field, in declared order.
    fn visit_meta(visitor: &mut V);
}

// Qualified instances iterate like the canonical type. Value enumeration
// needs a mutable path to the instance, so only `&mut T` forwards here;
// metadata enumeration forwards for both reference forms.
impl<T, V> VisitFields<V> for &mut T
where
    T: VisitFields<V>,
{
    #[inline]
    fn visit_fields(&mut self, visitor: &mut V) {
        (**self).visit_fields(visitor);
    }
}

impl<T, V> VisitMeta<V> for &T
where
    T: VisitMeta<V>,
{
    #[inline]
    fn visit_meta(visitor: &mut V) {
        T::visit_meta(visitor);
    }
}

impl<T, V> VisitMeta<V> for &mut T
where
    T: VisitMeta<V>,
{
    #[inline]
    fn visit_meta(visitor: &mut V) {
        T::visit_meta(visitor);
    }
}

/// Enumerate the fields of `instance`, in declared order.
///
/// For each field the visitor receives the field's name and a mutable
/// reference to that field's storage inside `instance`. See
/// [`FieldVisitor`] for the shape-selection rule.
#[inline]
pub fn for_each_field<C, V>(instance: &mut C, visitor: &mut V)
where
    C: VisitFields<V>,
{
    #[cfg(feature = "logging")]
    log::trace!(
        "for_each_field: type={} fields={}",
        C::TYPE_NAME,
        C::FIELD_COUNT
    );
    instance.visit_fields(visitor);
}

/// Enumerate the field metadata of `C`, in declared order, with no instance.
///
/// Call as `for_each_field_meta::<C, _>(&mut visitor)`. See [`MetaVisitor`]
/// for the shape-selection rule.
#[inline]
pub fn for_each_field_meta<C, V>(visitor: &mut V)
where
    C: VisitMeta<V>,
{
    #[cfg(feature = "logging")]
    log::trace!(
        "for_each_field_meta: type={} fields={}",
        C::TYPE_NAME,
        C::FIELD_COUNT
    );
    C::visit_meta(visitor);
}
