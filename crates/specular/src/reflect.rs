// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Descriptor registry: per-type field sequences with qualifier collapsing.
//!
//! [`Reflect`] associates a type with its ordered, heterogeneous descriptor
//! sequence. The association is never derived from the type's definition;
//! a type's owner declares it once via [`reflect_fields!`](crate::reflect_fields).
//! Blanket impls for `&T` and `&mut T` forward every associated item to `T`,
//! so any reference form of a registered type resolves to the identical
//! sequence - lookups are qualifier-insensitive.

/// Per-type registry of the declared field sequence.
///
/// Implemented by [`reflect_fields!`](crate::reflect_fields); do not
/// implement by hand. Looking up a type that registered no sequence is an
/// unsatisfied-bound compile error, not a runtime fallback:
///
/// ```compile_fail
/// use specular::field_count;
///
/// struct Unregistered;
///
/// let _ = field_count::<Unregistered>();
/// ```
pub trait Reflect {
    /// The descriptor sequence type: a tuple with one
    /// [`Field<Self, T>`](crate::Field) element per declared field.
    type Fields: Copy;

    /// The descriptor sequence, in declared field order.
    const FIELDS: Self::Fields;

    /// Number of declared fields.
    const FIELD_COUNT: usize;

    /// Declared field names, in declared order. Uniqueness is not required.
    const FIELD_NAMES: &'static [&'static str];

    /// Name of the owning type as registered.
    const TYPE_NAME: &'static str;
}

// Qualifier normalization: reference forms resolve to the canonical type's
// sequence. The descriptors keep the canonical owner, so `<&T>::FIELDS` and
// `<T>::FIELDS` are the same constant.
impl<T: Reflect> Reflect for &T {
    type Fields = T::Fields;
    const FIELDS: Self::Fields = T::FIELDS;
    const FIELD_COUNT: usize = T::FIELD_COUNT;
    const FIELD_NAMES: &'static [&'static str] = T::FIELD_NAMES;
    const TYPE_NAME: &'static str = T::TYPE_NAME;
}

impl<T: Reflect> Reflect for &mut T {
    type Fields = T::Fields;
    const FIELDS: Self::Fields = T::FIELDS;
    const FIELD_COUNT: usize = T::FIELD_COUNT;
    const FIELD_NAMES: &'static [&'static str] = T::FIELD_NAMES;
    const TYPE_NAME: &'static str = T::TYPE_NAME;
}

/// The descriptor sequence registered for `T`, as a value.
///
/// ```rust
/// use specular::{fields_of, reflect_fields};
///
/// struct Pair {
///     a: u8,
///     b: u16,
/// }
///
/// reflect_fields!(Pair { a: u8, b: u16 });
///
/// let (a, b) = fields_of::<Pair>();
/// assert_eq!(a.name(), "a");
/// assert_eq!(b.name(), "b");
/// ```
pub const fn fields_of<T: Reflect>() -> T::Fields {
    T::FIELDS
}

/// Number of fields registered for `T`.
pub const fn field_count<T: Reflect>() -> usize {
    T::FIELD_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pose {
        x: f64,
        y: f64,
        heading: f64,
    }

    crate::reflect_fields!(Pose {
        x: f64,
        y: f64,
        heading: f64,
    });

    #[test]
    fn test_field_count_matches_declaration() {
        assert_eq!(Pose::FIELD_COUNT, 3);
        assert_eq!(field_count::<Pose>(), 3);
    }

    #[test]
    fn test_field_names_in_declared_order() {
        assert_eq!(Pose::FIELD_NAMES, &["x", "y", "heading"]);
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Pose::TYPE_NAME, "Pose");
    }

    #[test]
    fn test_fields_of_yields_declared_sequence() {
        let (x, y, heading) = fields_of::<Pose>();
        assert_eq!(x.name(), "x");
        assert_eq!(y.name(), "y");
        assert_eq!(heading.name(), "heading");

        let mut p = Pose {
            x: 1.0,
            y: 2.0,
            heading: 0.5,
        };
        assert_eq!(*x.get_mut(&mut p), 1.0);
        assert_eq!(*y.get_mut(&mut p), 2.0);
        assert_eq!(*heading.get_mut(&mut p), 0.5);
    }

    #[test]
    fn test_reference_forms_resolve_to_same_sequence() {
        assert_eq!(<&Pose>::FIELD_COUNT, Pose::FIELD_COUNT);
        assert_eq!(<&mut Pose>::FIELD_COUNT, Pose::FIELD_COUNT);
        assert_eq!(<&&Pose>::FIELD_COUNT, Pose::FIELD_COUNT);
        assert_eq!(<&Pose>::FIELD_NAMES, Pose::FIELD_NAMES);
        assert_eq!(<&mut Pose>::FIELD_NAMES, Pose::FIELD_NAMES);
        assert_eq!(<&Pose>::TYPE_NAME, Pose::TYPE_NAME);

        // The forwarded sequence keeps the canonical owner: its accessors
        // still apply to a plain Pose instance.
        let (x, ..) = <&mut Pose as Reflect>::FIELDS;
        let mut p = Pose {
            x: 9.0,
            y: 0.0,
            heading: 0.0,
        };
        assert_eq!(*x.get_mut(&mut p), 9.0);
    }
}
