//! The name capability
//!
//! A type has the name capability when it exposes a field conventionally
//! named "name" whose type converts to a string. The capability is a
//! property of the type, not of its values: it is an associated constant,
//! so it can be branched on for free and asserted on at build time.
//!
//! Implement [`NameCapability`] with `#[derive(NameCapability)]`, which
//! inspects the declared fields, or by hand for types whose name lives
//! somewhere a derive can't see.

use std::rc::Rc;
use std::sync::Arc;

/// Polymorphic over the name capability: present or absent.
pub trait NameCapability {
    /// Whether the type exposes a string-convertible "name" field.
    const HAS_NAME: bool;

    /// The name as text; `None` exactly when `HAS_NAME` is false.
    fn name_text(&self) -> Option<String>;
}

/// Whether `T` has the name capability.
///
/// A `const fn`, so it can be used in `const` items and assertions:
///
/// ```
/// use shapeprobe::{has_name_field, NameCapability};
///
/// #[derive(NameCapability)]
/// struct Person {
///     age: i32,
///     name: String,
/// }
///
/// const _: () = assert!(has_name_field::<Person>());
/// ```
pub const fn has_name_field<T: NameCapability + ?Sized>() -> bool {
    T::HAS_NAME
}

/// Select the name of a value, if its type has one.
///
/// Branches on the type's constant, so for types without the
/// capability this compiles down to `None`.
pub fn name_of<T: NameCapability + ?Sized>(value: &T) -> Option<String> {
    if T::HAS_NAME {
        value.name_text()
    } else {
        None
    }
}

/// Describe a value by its name when it has one, otherwise by a fallback.
pub fn label_or<T: NameCapability + ?Sized>(value: &T, fallback: &str) -> String {
    name_of(value).unwrap_or_else(|| fallback.to_string())
}

/// Assert at compile time that each type has the name capability.
///
/// ```
/// use shapeprobe::{assert_has_name, NameCapability};
///
/// #[derive(NameCapability)]
/// struct Person {
///     name: String,
/// }
///
/// assert_has_name!(Person);
/// ```
#[macro_export]
macro_rules! assert_has_name {
    ($($ty:ty),+ $(,)?) => {
        $(
            const _: () = ::core::assert!($crate::has_name_field::<$ty>());
        )+
    };
}

/// Assert at compile time that each type lacks the name capability.
///
/// ```
/// use shapeprobe::{assert_lacks_name, NameCapability};
///
/// #[derive(NameCapability)]
/// struct Package {
///     weight: f64,
///     volume: f64,
/// }
///
/// assert_lacks_name!(Package);
/// ```
#[macro_export]
macro_rules! assert_lacks_name {
    ($($ty:ty),+ $(,)?) => {
        $(
            const _: () = ::core::assert!(!$crate::has_name_field::<$ty>());
        )+
    };
}

// ═══════════════════════════════════════════════════════════════════════
// Forwarding impls
// ═══════════════════════════════════════════════════════════════════════

macro_rules! forward_name_capability {
    ($($wrapper:ty),+ $(,)?) => {
        $(
            impl<T: NameCapability + ?Sized> NameCapability for $wrapper {
                const HAS_NAME: bool = T::HAS_NAME;

                fn name_text(&self) -> Option<String> {
                    (**self).name_text()
                }
            }
        )+
    };
}

forward_name_capability!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NameCapability;

    #[derive(NameCapability)]
    struct Person {
        #[allow(dead_code)]
        age: i32,
        name: String,
    }

    #[derive(NameCapability)]
    #[allow(dead_code)]
    struct Package {
        weight: f64,
        volume: f64,
    }

    assert_has_name!(Person);
    assert_lacks_name!(Package);

    #[test]
    fn test_has_name_field() {
        assert!(has_name_field::<Person>());
        assert!(!has_name_field::<Package>());
    }

    #[test]
    fn test_has_name_field_is_idempotent() {
        let first = has_name_field::<Person>();
        for _ in 0..10 {
            assert_eq!(has_name_field::<Person>(), first);
            assert!(!has_name_field::<Package>());
        }
    }

    #[test]
    fn test_name_of_selects_by_capability() {
        let person = Person {
            age: 30,
            name: "Ada".to_string(),
        };
        let package = Package {
            weight: 1.5,
            volume: 2.0,
        };

        assert_eq!(name_of(&person), Some("Ada".to_string()));
        assert_eq!(name_of(&package), None);
        assert_eq!(label_or(&package, "package"), "package");
    }

    #[test]
    fn test_capability_ignores_instance_state() {
        let empty = Person {
            age: 0,
            name: String::new(),
        };
        assert!(has_name_field::<Person>());
        assert_eq!(name_of(&empty), Some(String::new()));
    }

    #[test]
    fn test_forwarding_impls() {
        let person = Person {
            age: 41,
            name: "Grace".to_string(),
        };

        assert!(has_name_field::<&Person>());
        assert!(has_name_field::<Box<Person>>());
        assert!(has_name_field::<Arc<Package>>() == has_name_field::<Package>());
        assert_eq!(name_of(&Rc::new(person)), Some("Grace".to_string()));
    }
}
