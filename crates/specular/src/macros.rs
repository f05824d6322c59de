// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registration macros: declare one field, or a whole field sequence.
//!
//! [`reflect_fields!`](crate::reflect_fields) is the sole registration
//! point; there is no implicit or derived registration. Expansion uses
//! `$crate::` paths and fully qualified calls throughout, so neither macro
//! requires any imports at the call site.

/// Declare one field descriptor for `$owner`.
///
/// Stringifies the field identifier for the name and emits the accessor;
/// an optional bracketed list attaches const-evaluable attribute values.
///
/// ```rust
/// use specular::field;
///
/// struct Limits {
///     retries: u32,
/// }
///
/// struct Doc(&'static str);
///
/// let plain = field!(Limits, retries);
/// let documented = field!(Limits, retries, [Doc("max send attempts")]);
///
/// assert_eq!(plain.name(), "retries");
/// assert_eq!(documented.attr::<Doc>().unwrap().0, "max send attempts");
/// ```
#[macro_export]
macro_rules! field {
    ($owner:ty, $field:ident) => {
        $crate::Field::new(stringify!($field), |instance: &mut $owner| {
            &mut instance.$field
        })
    };
    ($owner:ty, $field:ident, [$($attr:expr),* $(,)?]) => {
        $crate::Field::with_attrs(
            stringify!($field),
            |instance: &mut $owner| &mut instance.$field,
            &[$(&$attr),*],
        )
    };
}

/// Register the field sequence of a type.
///
/// Declares, in order, every field the owning type exposes to reflection,
/// each optionally carrying a bracketed attribute list. Expands to the
/// [`Reflect`](crate::Reflect), [`VisitFields`](crate::VisitFields), and
/// [`VisitMeta`](crate::VisitMeta) impls; the visit bodies are unrolled
/// straight-line calls with no loop and no allocation.
///
/// ```rust
/// use specular::{field_count, reflect_fields};
///
/// struct Motor {
///     rpm: u32,
///     torque: f64,
/// }
///
/// struct Unit(&'static str);
///
/// reflect_fields!(Motor {
///     rpm: u32 [Unit("1/min")],
///     torque: f64 [Unit("Nm")],
/// });
///
/// assert_eq!(field_count::<Motor>(), 2);
/// ```
///
/// Registration is per concrete type; the field list is fixed for the
/// remainder of the program.
///
/// Attribute values must be const-evaluable; a heap-allocating attribute is
/// rejected at compile time:
///
/// ```compile_fail
/// use specular::reflect_fields;
///
/// struct Tag {
///     label: u8,
/// }
///
/// struct Owned(String);
///
/// reflect_fields!(Tag {
///     label: u8 [Owned(String::from("heap"))],
/// });
/// ```
#[macro_export]
macro_rules! reflect_fields {
    ($owner:ty { $($field:ident : $fty:ty $([$($attr:expr),* $(,)?])?),* $(,)? }) => {
        impl $crate::Reflect for $owner {
            type Fields = ($($crate::Field<$owner, $fty>,)*);
            const FIELDS: Self::Fields =
                ($($crate::field!($owner, $field $(, [$($attr),*])?),)*);
            const FIELD_COUNT: usize = Self::FIELD_NAMES.len();
            const FIELD_NAMES: &'static [&'static str] = &[$(stringify!($field)),*];
            const TYPE_NAME: &'static str = stringify!($owner);
        }

        impl<V> $crate::VisitFields<V> for $owner
        where
            V: $($crate::FieldVisitor<$owner, $fty> +)* Sized,
        {
            #[inline]
            fn visit_fields(&mut self, __visitor: &mut V) {
                let ($($field,)*) = <$owner as $crate::Reflect>::FIELDS;
                $(
                    <V as $crate::FieldVisitor<$owner, $fty>>::visit_field(
                        __visitor,
                        $field.name(),
                        $field.get_mut(self),
                        &$field,
                    );
                )*
                // a zero-field type otherwise leaves the visitor unused
                let _ = __visitor;
            }
        }

        impl<V> $crate::VisitMeta<V> for $owner
        where
            V: $($crate::MetaVisitor<$owner, $fty> +)* Sized,
        {
            #[inline]
            fn visit_meta(__visitor: &mut V) {
                let ($($field,)*) = <$owner as $crate::Reflect>::FIELDS;
                $(
                    <V as $crate::MetaVisitor<$owner, $fty>>::visit_field(
                        __visitor,
                        $field.name(),
                        &$field,
                    );
                )*
                let _ = __visitor;
            }
        }
    };
}
