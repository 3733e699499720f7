//! Service identification keys.
//!
//! [`ServiceKey`] uniquely identifies a service binding within the
//! registry. It pairs a [`TypeId`] with the type's name for diagnostics.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Uniquely identifies a service type in the registry.
///
/// Lookup is exact: a key matches a binding only when the requested type is
/// the bound type. Trait-object services key on the `dyn Trait` type itself,
/// so `ServiceKey::of::<dyn Logger>()` and `ServiceKey::of::<ConsoleLogger>()`
/// are distinct keys.
///
/// # Examples
/// ```
/// use weir_container::key::ServiceKey;
///
/// let key = ServiceKey::of::<String>();
/// assert_eq!(key.type_name(), "alloc::string::String");
/// assert_eq!(key, ServiceKey::of::<String>());
/// assert_ne!(key, ServiceKey::of::<i32>());
/// ```
#[derive(Clone, Copy)]
pub struct ServiceKey {
    type_id: TypeId,
    type_name: &'static str,
}

impl ServiceKey {
    /// Creates the key for service type `S`.
    #[inline]
    pub fn of<S: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<S>(),
            type_name: type_name::<S>(),
        }
    }

    /// Returns the [`TypeId`] of the keyed service type.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the fully qualified type name.
    ///
    /// Used in error messages and logs.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl PartialEq for ServiceKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ServiceKey {}

impl Hash for ServiceKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceKey({})", self.type_name)
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct GameClock;

    trait Audio {}

    #[test]
    fn key_of_type() {
        let key = ServiceKey::of::<GameClock>();
        assert!(key.type_name().contains("GameClock"));
    }

    #[test]
    fn key_equality_same_type() {
        assert_eq!(ServiceKey::of::<String>(), ServiceKey::of::<String>());
    }

    #[test]
    fn key_inequality_different_types() {
        assert_ne!(ServiceKey::of::<String>(), ServiceKey::of::<i32>());
    }

    #[test]
    fn trait_object_key_is_distinct_from_impls() {
        assert_ne!(ServiceKey::of::<dyn Audio>(), ServiceKey::of::<GameClock>());
    }

    #[test]
    fn key_in_hashmap() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(ServiceKey::of::<String>(), "string");
        map.insert(ServiceKey::of::<i32>(), "i32");
        assert_eq!(map.get(&ServiceKey::of::<String>()), Some(&"string"));
        assert_eq!(map.get(&ServiceKey::of::<bool>()), None);
    }

    #[test]
    fn display_shows_type_name() {
        let rendered = format!("{}", ServiceKey::of::<GameClock>());
        assert!(rendered.contains("GameClock"));
    }
}
