//! Seam to the external application framework ("the host").
//!
//! The container never walks host internals itself. One registration
//! convenience path needs to reuse an object the host already owns, or ask
//! the host to create and adopt one; [`Host`] is the object-safe facade
//! over exactly those two operations.

use std::any::TypeId;
use std::sync::Arc;

use crate::registry::ServiceRef;

/// The external framework's live-object search and creation facility.
///
/// `find_live` answers "does a live object of this type already exist?".
/// `adopt` creates one through the host — the host runs the `spawn` recipe
/// so the new object ends up owned and tracked like any other host object,
/// not constructed loose on the side.
pub trait Host: Send + Sync {
    /// Searches live host objects for one of the given type.
    fn find_live(&self, ty: TypeId) -> Option<ServiceRef>;

    /// Creates a new object via `spawn` and adopts it into the host.
    fn adopt(&self, ty: TypeId, spawn: &dyn Fn() -> ServiceRef) -> ServiceRef;
}

/// A type whose instances live inside the host.
///
/// `spawn` is the recipe handed to [`Host::adopt`] when no live instance
/// exists yet.
pub trait HostComponent: Sized + Send + Sync + 'static {
    /// Builds a fresh instance for the host to adopt.
    fn spawn() -> Arc<Self>;
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use parking_lot::Mutex;

    use super::*;

    struct AudioPlayer {
        volume: u8,
    }

    impl HostComponent for AudioPlayer {
        fn spawn() -> Arc<Self> {
            Arc::new(AudioPlayer { volume: 50 })
        }
    }

    /// Host stub keeping adopted objects in a type-keyed bag.
    #[derive(Default)]
    struct StubHost {
        live: Mutex<HashMap<TypeId, ServiceRef>>,
    }

    impl Host for StubHost {
        fn find_live(&self, ty: TypeId) -> Option<ServiceRef> {
            self.live.lock().get(&ty).cloned()
        }

        fn adopt(&self, ty: TypeId, spawn: &dyn Fn() -> ServiceRef) -> ServiceRef {
            let spawned = spawn();
            self.live.lock().insert(ty, spawned.clone());
            spawned
        }
    }

    #[test]
    fn adopt_makes_the_object_findable() {
        let host = StubHost::default();
        let ty = TypeId::of::<AudioPlayer>();
        assert!(host.find_live(ty).is_none());

        let adopted = host.adopt(ty, &|| ServiceRef::new(AudioPlayer::spawn()));
        let found = host.find_live(ty).unwrap();

        let adopted = adopted.downcast::<AudioPlayer>().unwrap();
        let found = found.downcast::<AudioPlayer>().unwrap();
        assert!(Arc::ptr_eq(&adopted, &found));
        assert_eq!(found.volume, 50);
    }
}
