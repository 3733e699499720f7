//! Service registry — stores the type-keyed bindings.
//!
//! The registry maps [`ServiceKey`] to a bound instance or to a lazy rule
//! that produces one. Every service lives behind an `Arc`; there are no
//! value-type services. Lookup is exact and bindings are process-wide
//! singletons: a lazy rule runs at most once and its result is memoized.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, trace};
use weir_support::rendering::suggest_similar;

use crate::error::{AlreadyBoundError, MissingServiceError, WeirError};
use crate::key::ServiceKey;

/// Type-erased, clonable handle to a resolved service.
///
/// The erased payload is the `Arc<S>` itself, so trait-object services
/// (`Arc<dyn Trait>`) round-trip through erasure intact.
#[derive(Clone)]
pub struct ServiceRef(Arc<dyn Any + Send + Sync>);

impl ServiceRef {
    /// Wraps a shared service instance.
    pub fn new<S: ?Sized + Send + Sync + 'static>(instance: Arc<S>) -> Self {
        Self(Arc::new(instance))
    }

    /// Recovers the typed handle, or `None` if `S` is not the bound type.
    pub fn downcast<S: ?Sized + Send + Sync + 'static>(&self) -> Option<Arc<S>> {
        self.0.downcast_ref::<Arc<S>>().cloned()
    }
}

impl fmt::Debug for ServiceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRef").finish_non_exhaustive()
    }
}

/// Upcast from a concrete implementation to the service form it is bound
/// under.
///
/// The identity upcast is provided for every sized type; binding a concrete
/// type behind a trait object takes a one-line impl:
///
/// ```
/// use std::sync::Arc;
/// use weir_container::registry::IntoService;
///
/// trait Logger: Send + Sync {}
/// struct ConsoleLogger;
/// impl Logger for ConsoleLogger {}
///
/// impl IntoService<dyn Logger> for ConsoleLogger {
///     fn into_service(self: Arc<Self>) -> Arc<dyn Logger> {
///         self
///     }
/// }
/// ```
pub trait IntoService<S: ?Sized + Send + Sync + 'static>: Send + Sync + 'static {
    /// Converts the shared implementation into its service handle.
    fn into_service(self: Arc<Self>) -> Arc<S>;
}

impl<T: Send + Sync + 'static> IntoService<T> for T {
    fn into_service(self: Arc<Self>) -> Arc<T> {
        self
    }
}

/// What happens when a type that already has a binding is bound again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RebindPolicy {
    /// Rebinding fails with [`AlreadyBoundError`].
    #[default]
    Reject,
    /// The new binding replaces the old one.
    Replace,
}

impl fmt::Display for RebindPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RebindPolicy::Reject => write!(f, "Reject"),
            RebindPolicy::Replace => write!(f, "Replace"),
        }
    }
}

/// A binding's value: a ready instance, or a rule run once on demand.
enum Provider {
    Instance(ServiceRef),
    Lazy {
        cell: OnceCell<ServiceRef>,
        provide: Box<dyn Fn() -> ServiceRef + Send + Sync>,
    },
}

impl Provider {
    fn realize(&self) -> ServiceRef {
        match self {
            Provider::Instance(service) => service.clone(),
            Provider::Lazy { cell, provide } => cell.get_or_init(|| provide()).clone(),
        }
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Instance(_) => write!(f, "Provider::Instance"),
            Provider::Lazy { cell, .. } => f
                .debug_struct("Provider::Lazy")
                .field("realized", &cell.get().is_some())
                .finish(),
        }
    }
}

/// Holds the type→service bindings and resolves requests against them.
///
/// ```
/// use std::sync::Arc;
/// use weir_container::key::ServiceKey;
/// use weir_container::registry::{RebindPolicy, ServiceRegistry};
///
/// let mut registry = ServiceRegistry::new(RebindPolicy::Reject);
/// registry.bind_instance(Arc::new(7u32)).unwrap();
///
/// let resolved = registry.resolve(&ServiceKey::of::<u32>()).unwrap();
/// assert_eq!(*resolved.downcast::<u32>().unwrap(), 7);
/// ```
#[derive(Debug)]
pub struct ServiceRegistry {
    bindings: HashMap<ServiceKey, Provider>,
    rebind: RebindPolicy,
}

impl ServiceRegistry {
    /// Creates an empty registry with the given rebind policy.
    pub fn new(rebind: RebindPolicy) -> Self {
        Self {
            bindings: HashMap::new(),
            rebind,
        }
    }

    pub(crate) fn set_rebind(&mut self, rebind: RebindPolicy) {
        self.rebind = rebind;
    }

    /// Binds `S` directly to `instance`.
    pub fn bind_instance<S: ?Sized + Send + Sync + 'static>(
        &mut self,
        instance: Arc<S>,
    ) -> Result<(), WeirError> {
        self.bind(
            ServiceKey::of::<S>(),
            Provider::Instance(ServiceRef::new(instance)),
        )
    }

    /// Binds `S` to a default-constructed instance, built on first resolve.
    pub fn bind_default<S: Default + Send + Sync + 'static>(&mut self) -> Result<(), WeirError> {
        self.bind_lazy::<S>(|| Arc::new(S::default()))
    }

    /// Binds `S` to a rule producing the instance lazily.
    ///
    /// The rule runs at most once; the produced instance is memoized and
    /// shared by every later resolve. Rules receive nothing to resolve
    /// with: an injected service is never itself injected.
    pub fn bind_lazy<S: ?Sized + Send + Sync + 'static>(
        &mut self,
        provide: impl Fn() -> Arc<S> + Send + Sync + 'static,
    ) -> Result<(), WeirError> {
        self.bind(
            ServiceKey::of::<S>(),
            Provider::Lazy {
                cell: OnceCell::new(),
                provide: Box::new(move || ServiceRef::new(provide())),
            },
        )
    }

    fn bind(&mut self, key: ServiceKey, provider: Provider) -> Result<(), WeirError> {
        if self.bindings.contains_key(&key) {
            match self.rebind {
                RebindPolicy::Reject => {
                    return Err(WeirError::AlreadyBound(AlreadyBoundError { key }));
                }
                RebindPolicy::Replace => debug!(key = %key, "Replacing existing binding"),
            }
        }

        debug!(key = %key, "Bound service");
        self.bindings.insert(key, provider);
        Ok(())
    }

    /// Resolves a key to the bound instance.
    ///
    /// Exact match only; a miss is a [`MissingServiceError`].
    pub fn resolve(&self, key: &ServiceKey) -> Result<ServiceRef, MissingServiceError> {
        let provider = self
            .bindings
            .get(key)
            .ok_or(MissingServiceError { requested: *key })?;
        trace!(key = %key, "Resolved service");
        Ok(provider.realize())
    }

    /// Bound type names that look like the requested one, best first.
    pub(crate) fn suggestions_for(&self, requested: &ServiceKey) -> Vec<String> {
        let bound: Vec<&str> = self.bindings.keys().map(|key| key.type_name()).collect();
        suggest_similar(requested.type_name(), &bound, 3)
    }

    /// Clears all bindings. Idempotent.
    pub fn dispose(&mut self) {
        if !self.bindings.is_empty() {
            debug!(dropped = self.bindings.len(), "Clearing service bindings");
        }
        self.bindings.clear();
    }

    /// Returns the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no services are bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new(RebindPolicy::default())
    }
}
