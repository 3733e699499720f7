//! # The Container — public facade of Weir
//!
//! Routes dependents to the injector once the registry is ready, and
//! queues the ones that arrive earlier.
//!
//! # Lifecycle
//! ```text
//! Uninitialized ──make_ready()──> Ready ──dispose()──> Disposed
//!       │                           │
//!  requests queue          requests inject now
//! ```
//!
//! # Examples
//! ```rust
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use weir_container::container::Container;
//!
//! #[derive(Default)]
//! struct GameClock;
//!
//! #[derive(Default)]
//! struct Hud {
//!     clock: Option<Arc<GameClock>>,
//! }
//!
//! impl Hud {
//!     fn wire(&mut self, clock: Arc<GameClock>) {
//!         self.clock = Some(clock);
//!     }
//! }
//!
//! weir_container::injection! {
//!     Hud {
//!         fn wire(GameClock);
//!     }
//! }
//!
//! # fn main() -> weir_container::error::Result<()> {
//! let mut container = Container::new();
//!
//! // A request made before readiness waits in line.
//! let early = Arc::new(Mutex::new(Hud::default()));
//! container.request_injection(early.clone())?;
//!
//! container.register::<GameClock>()?;
//! container.make_ready()?;
//!
//! assert!(early.lock().clock.is_some());
//! # Ok(())
//! # }
//! ```

use std::any::TypeId;
use std::collections::VecDeque;
use std::fmt;
use std::mem;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::dependent::SharedDependent;
use crate::error::{
    DisposedError, HostMissingError, MissingDependencyError, Result, WeirError, WiringError,
};
use crate::host::{Host, HostComponent};
use crate::injector::{Injector, ReusePolicy};
use crate::key::ServiceKey;
use crate::registry::{IntoService, RebindPolicy, ServiceRef, ServiceRegistry};

// ============================================================
// States and outcomes
// ============================================================

/// Where the container is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    /// Registrations are being collected; injection requests queue.
    Uninitialized,
    /// The registry is functional; requests inject immediately.
    Ready,
    /// Torn down; requests fail.
    Disposed,
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerState::Uninitialized => write!(f, "Uninitialized"),
            ContainerState::Ready => write!(f, "Ready"),
            ContainerState::Disposed => write!(f, "Disposed"),
        }
    }
}

/// What happened to an injection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionOutcome {
    /// The container was not ready; the dependent waits in the queue.
    Queued,
    /// The dependent was injected on the spot.
    Injected,
    /// No container was available; nothing happened.
    Skipped,
}

/// The lifecycle phase, with the injector living only inside `Ready`.
enum Phase {
    Uninitialized,
    Ready(Injector),
    Disposed,
}

type ReadyObserver = Box<dyn FnOnce(&Container) + Send>;

// ============================================================
// Container
// ============================================================

/// The dependency-injection container.
///
/// Owns the service registry, the pending-dependent queue, and (once ready)
/// the injector. All state is per-instance: independent containers never
/// share caches or queues.
pub struct Container {
    phase: Phase,
    registry: ServiceRegistry,
    pending: VecDeque<SharedDependent>,
    observers: Vec<ReadyObserver>,
    host: Option<Arc<dyn Host>>,
    reuse: ReusePolicy,
}

impl Container {
    /// Creates an uninitialized container with default policies.
    pub fn new() -> Self {
        Self {
            phase: Phase::Uninitialized,
            registry: ServiceRegistry::new(RebindPolicy::Reject),
            pending: VecDeque::new(),
            observers: Vec::new(),
            host: None,
            reuse: ReusePolicy::Fresh,
        }
    }

    /// Attaches the external framework facade used by
    /// [`register_hosted`](Container::register_hosted).
    pub fn with_host(mut self, host: Arc<dyn Host>) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the argument-reuse policy for injections.
    ///
    /// Takes effect when the container becomes ready.
    pub fn with_reuse_policy(mut self, reuse: ReusePolicy) -> Self {
        self.reuse = reuse;
        self
    }

    /// Allows later registrations to replace existing bindings.
    pub fn allow_rebind(mut self, allowed: bool) -> Self {
        let rebind = if allowed {
            RebindPolicy::Replace
        } else {
            RebindPolicy::Reject
        };
        self.registry.set_rebind(rebind);
        self
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> ContainerState {
        match self.phase {
            Phase::Uninitialized => ContainerState::Uninitialized,
            Phase::Ready(_) => ContainerState::Ready,
            Phase::Disposed => ContainerState::Disposed,
        }
    }

    fn ensure_live(&self, operation: &'static str) -> Result<()> {
        if matches!(self.phase, Phase::Disposed) {
            return Err(WeirError::Disposed(DisposedError { operation }));
        }
        Ok(())
    }

    // ── Registration (fluent, chain with `?`) ──

    /// Binds `S` to a default-constructed instance, built on first resolve.
    pub fn register<S>(&mut self) -> Result<&mut Self>
    where
        S: Default + Send + Sync + 'static,
    {
        self.ensure_live("registration")?;
        self.registry.bind_default::<S>()?;
        Ok(self)
    }

    /// Binds `S` directly to `instance`.
    pub fn register_instance<S: ?Sized + Send + Sync + 'static>(
        &mut self,
        instance: Arc<S>,
    ) -> Result<&mut Self> {
        self.ensure_live("registration")?;
        self.registry.bind_instance(instance)?;
        Ok(self)
    }

    /// Binds `S` to a rule producing the instance lazily (at most once).
    pub fn register_with<S: ?Sized + Send + Sync + 'static>(
        &mut self,
        rule: impl Fn() -> Arc<S> + Send + Sync + 'static,
    ) -> Result<&mut Self> {
        self.ensure_live("registration")?;
        self.registry.bind_lazy(rule)?;
        Ok(self)
    }

    /// Binds service `S` to a lazily default-constructed `I`.
    pub fn register_impl<S, I>(&mut self) -> Result<&mut Self>
    where
        S: ?Sized + Send + Sync + 'static,
        I: Default + IntoService<S>,
    {
        self.ensure_live("registration")?;
        self.registry
            .bind_lazy::<S>(|| I::into_service(Arc::new(I::default())))?;
        Ok(self)
    }

    /// Binds service `S` to a host-managed `I`.
    ///
    /// Searches the attached host for a live `I` first; when none exists,
    /// the host creates and adopts one through its own facility. The
    /// found-or-created instance is bound eagerly.
    pub fn register_hosted<S, I>(&mut self) -> Result<&mut Self>
    where
        S: ?Sized + Send + Sync + 'static,
        I: HostComponent + IntoService<S>,
    {
        self.ensure_live("registration")?;
        let host = self.host.clone().ok_or_else(|| {
            WeirError::HostMissing(HostMissingError {
                implementation: std::any::type_name::<I>(),
            })
        })?;

        let ty = TypeId::of::<I>();
        let component = match host.find_live(ty).and_then(|live| live.downcast::<I>()) {
            Some(live) => {
                debug!(
                    component = std::any::type_name::<I>(),
                    "Reusing live host object"
                );
                live
            }
            None => {
                let adopted = host.adopt(ty, &|| ServiceRef::new(I::spawn()));
                adopted.downcast::<I>().ok_or_else(|| {
                    WeirError::Wiring(WiringError {
                        dependent: std::any::type_name::<I>(),
                        point: "adopt",
                        expected: std::any::type_name::<I>(),
                    })
                })?
            }
        };

        self.registry.bind_instance::<S>(I::into_service(component))?;
        Ok(self)
    }

    // ── Readiness ──

    /// Runs `observer` once when the container becomes ready.
    ///
    /// Observers registered after readiness run immediately; observers on a
    /// disposed container are dropped.
    pub fn on_ready(&mut self, observer: impl FnOnce(&Container) + Send + 'static) {
        match &self.phase {
            Phase::Uninitialized => self.observers.push(Box::new(observer)),
            Phase::Ready(_) => observer(self),
            Phase::Disposed => debug!("Dropping readiness observer; container is disposed"),
        }
    }

    /// Marks registrations complete: notifies observers, then drains the
    /// pending queue in submission order.
    ///
    /// Each queued dependent is fully injected before the next; the first
    /// failure propagates and leaves the rest queued. Calling again while
    /// ready is harmless and finishes any drain a failure interrupted.
    pub fn make_ready(&mut self) -> Result<()> {
        match self.phase {
            Phase::Ready(_) => {
                debug!("Container already ready");
                return self.drain_pending();
            }
            Phase::Disposed => {
                return Err(WeirError::Disposed(DisposedError {
                    operation: "make_ready",
                }));
            }
            Phase::Uninitialized => {}
        }

        info!(
            bindings = self.registry.len(),
            queued = self.pending.len(),
            "Container ready"
        );
        self.phase = Phase::Ready(Injector::new(self.reuse));

        for notify in mem::take(&mut self.observers) {
            notify(self);
        }

        self.drain_pending()
    }

    fn drain_pending(&mut self) -> Result<()> {
        while let Some(dependent) = self.pending.pop_front() {
            if let Phase::Ready(injector) = &self.phase {
                injector.inject(&mut *dependent.lock(), &self.registry)?;
            }
        }
        Ok(())
    }

    // ── Injection ──

    /// Injects `dependent` now, or queues it until readiness.
    pub fn request_injection(&mut self, dependent: SharedDependent) -> Result<InjectionOutcome> {
        match &self.phase {
            Phase::Uninitialized => {
                debug!(queued = self.pending.len() + 1, "Queued dependent; container not ready");
                self.pending.push_back(dependent);
                Ok(InjectionOutcome::Queued)
            }
            Phase::Ready(injector) => {
                injector.inject(&mut *dependent.lock(), &self.registry)?;
                Ok(InjectionOutcome::Injected)
            }
            Phase::Disposed => Err(WeirError::Disposed(DisposedError {
                operation: "request_injection",
            })),
        }
    }

    /// Resolves a bound service by type.
    ///
    /// ```rust,ignore
    /// let clock: Arc<GameClock> = container.resolve()?;
    /// ```
    pub fn resolve<S: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<S>> {
        if matches!(self.phase, Phase::Disposed) {
            return Err(WeirError::Disposed(DisposedError {
                operation: "resolve",
            }));
        }

        let key = ServiceKey::of::<S>();
        let service = self.registry.resolve(&key).map_err(|missing| {
            let suggestions = self.registry.suggestions_for(&missing.requested);
            WeirError::MissingDependency(MissingDependencyError {
                requested: missing.requested,
                dependent: None,
                point: None,
                suggestions,
            })
        })?;

        service.downcast::<S>().ok_or_else(|| {
            WeirError::Wiring(WiringError {
                dependent: key.type_name(),
                point: "resolve",
                expected: key.type_name(),
            })
        })
    }

    // ── Teardown ──

    /// Tears the container down: clears bindings, drops the injector and
    /// its records, and empties the queue without injecting. Idempotent.
    pub fn dispose(&mut self) {
        if matches!(self.phase, Phase::Disposed) {
            return;
        }

        info!(
            bindings = self.registry.len(),
            queued = self.pending.len(),
            "Disposing container"
        );
        self.registry.dispose();
        self.pending.clear();
        self.observers.clear();
        self.phase = Phase::Disposed;
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Container {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("state", &self.state())
            .field("bindings", &self.registry.len())
            .field("queued", &self.pending.len())
            .finish()
    }
}

// ============================================================
// Degraded entry point
// ============================================================

/// Routes an injection request to a container that may not exist.
///
/// When the application never created a container, injection is skipped
/// with a warning instead of failing, so the host keeps running degraded.
pub fn request_or_skip(
    container: Option<&mut Container>,
    dependent: SharedDependent,
) -> Result<InjectionOutcome> {
    match container {
        Some(container) => container.request_injection(dependent),
        None => {
            warn!("Skipping injection; no service container is available");
            Ok(InjectionOutcome::Skipped)
        }
    }
}

// ============================================================
// Prelude
// ============================================================

pub mod prelude {
    pub use super::{Container, ContainerState, InjectionOutcome, request_or_skip};
    pub use crate::dependent::{Dependent, SharedDependent, share};
    pub use crate::error::{Result, WeirError};
    pub use crate::host::{Host, HostComponent};
    pub use crate::injector::{Injector, ReusePolicy};
    pub use crate::key::ServiceKey;
    pub use crate::registry::{IntoService, RebindPolicy, ServiceRef, ServiceRegistry};
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};

    use parking_lot::Mutex;

    use super::*;

    #[derive(Default)]
    struct EventLog {
        entries: Mutex<Vec<String>>,
    }

    trait Logger: Send + Sync {
        fn log(&self, msg: &str);
    }

    #[derive(Default)]
    struct NullLogger;

    impl Logger for NullLogger {
        fn log(&self, _msg: &str) {}
    }

    impl IntoService<dyn Logger> for NullLogger {
        fn into_service(self: Arc<Self>) -> Arc<dyn Logger> {
            self
        }
    }

    /// Records its tag into the shared log when wired.
    struct Probe {
        tag: &'static str,
        log: Option<Arc<EventLog>>,
    }

    impl Probe {
        fn new(tag: &'static str) -> Self {
            Self { tag, log: None }
        }

        fn wire(&mut self, log: Arc<EventLog>) {
            log.entries.lock().push(self.tag.to_string());
            self.log = Some(log);
        }
    }

    crate::injection! {
        Probe {
            fn wire(EventLog);
        }
    }

    struct NeedsLogger {
        logger: Option<Arc<dyn Logger>>,
    }

    impl NeedsLogger {
        fn wire(&mut self, logger: Arc<dyn Logger>) {
            self.logger = Some(logger);
        }
    }

    crate::injection! {
        NeedsLogger {
            fn wire(dyn Logger);
        }
    }

    #[test]
    fn fluent_registration_chains() {
        let mut container = Container::new();
        container
            .register::<EventLog>()
            .unwrap()
            .register_instance::<dyn Logger>(Arc::new(NullLogger))
            .unwrap()
            .register_with::<String>(|| Arc::new(String::from("title")))
            .unwrap();

        container.make_ready().unwrap();
        assert_eq!(*container.resolve::<String>().unwrap(), "title");
    }

    #[test]
    fn resolve_returns_registered_instance() {
        let log = Arc::new(EventLog::default());
        let mut container = Container::new();
        container.register_instance(log.clone()).unwrap();
        container.make_ready().unwrap();

        let resolved = container.resolve::<EventLog>().unwrap();
        assert!(Arc::ptr_eq(&log, &resolved));
    }

    #[test]
    fn resolve_unbound_suggests_and_fails() {
        let mut container = Container::new();
        container.register::<EventLog>().unwrap();
        container.make_ready().unwrap();

        let err = container.resolve::<String>().unwrap_err();
        assert!(matches!(err, WeirError::MissingDependency(_)));
    }

    #[test]
    fn duplicate_registration_fails_by_default() {
        let mut container = Container::new();
        container.register::<EventLog>().unwrap();
        let err = container.register::<EventLog>().unwrap_err();
        assert!(matches!(err, WeirError::AlreadyBound(_)));
    }

    #[test]
    fn rebind_allowed_when_opted_in() {
        let mut container = Container::new().allow_rebind(true);
        let first = Arc::new(EventLog::default());
        let second = Arc::new(EventLog::default());
        container.register_instance(first).unwrap();
        container.register_instance(second.clone()).unwrap();
        container.make_ready().unwrap();

        let resolved = container.resolve::<EventLog>().unwrap();
        assert!(Arc::ptr_eq(&second, &resolved));
    }

    #[test]
    fn queued_dependents_inject_in_submission_order() {
        let log = Arc::new(EventLog::default());
        let mut container = Container::new();

        let first = container
            .request_injection(Arc::new(Mutex::new(Probe::new("first"))))
            .unwrap();
        let second = container
            .request_injection(Arc::new(Mutex::new(Probe::new("second"))))
            .unwrap();
        assert_eq!(first, InjectionOutcome::Queued);
        assert_eq!(second, InjectionOutcome::Queued);
        assert!(log.entries.lock().is_empty());

        container.register_instance(log.clone()).unwrap();
        container.make_ready().unwrap();

        assert_eq!(*log.entries.lock(), vec!["first", "second"]);
    }

    #[test]
    fn ready_container_injects_immediately() {
        let log = Arc::new(EventLog::default());
        let mut container = Container::new();
        container.register_instance(log.clone()).unwrap();
        container.make_ready().unwrap();

        let probe = Arc::new(Mutex::new(Probe::new("now")));
        let outcome = container.request_injection(probe.clone()).unwrap();

        assert_eq!(outcome, InjectionOutcome::Injected);
        assert!(probe.lock().log.is_some());
        assert_eq!(*log.entries.lock(), vec!["now"]);
    }

    #[test]
    fn observers_fire_once_before_the_drain() {
        let log = Arc::new(EventLog::default());
        let fired = Arc::new(AtomicU32::new(0));

        let mut container = Container::new();
        container.register_instance(log.clone()).unwrap();
        container
            .request_injection(Arc::new(Mutex::new(Probe::new("queued"))))
            .unwrap();

        container.on_ready({
            let log = log.clone();
            let fired = fired.clone();
            move |container| {
                fired.fetch_add(1, Ordering::SeqCst);
                assert_eq!(container.state(), ContainerState::Ready);
                log.entries.lock().push("ready".to_string());
            }
        });

        container.make_ready().unwrap();
        container.make_ready().unwrap();

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(*log.entries.lock(), vec!["ready", "queued"]);
    }

    #[test]
    fn observer_after_readiness_fires_immediately() {
        let fired = Arc::new(AtomicU32::new(0));
        let mut container = Container::new();
        container.make_ready().unwrap();

        container.on_ready({
            let fired = fired.clone();
            move |_| {
                fired.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drain_failure_leaves_the_rest_queued() {
        let log = Arc::new(EventLog::default());
        let mut container = Container::new();
        container.register_instance(log.clone()).unwrap();

        let starved = Arc::new(Mutex::new(NeedsLogger { logger: None }));
        container.request_injection(starved.clone()).unwrap();
        container
            .request_injection(Arc::new(Mutex::new(Probe::new("behind"))))
            .unwrap();

        let err = container.make_ready().unwrap_err();
        assert!(matches!(err, WeirError::MissingDependency(_)));
        assert!(starved.lock().logger.is_none());
        assert!(log.entries.lock().is_empty());

        // Binding the gap and asking again finishes the drain.
        container
            .register_instance::<dyn Logger>(Arc::new(NullLogger))
            .unwrap();
        container.make_ready().unwrap();
        assert_eq!(*log.entries.lock(), vec!["behind"]);
    }

    #[test]
    fn replay_policy_reuses_arguments_across_instances() {
        let first_log = Arc::new(EventLog::default());
        let mut container = Container::new()
            .with_reuse_policy(ReusePolicy::Replay)
            .allow_rebind(true);
        container.register_instance(first_log.clone()).unwrap();
        container.make_ready().unwrap();

        let first = Arc::new(Mutex::new(Probe::new("a")));
        container.request_injection(first.clone()).unwrap();

        let second_log = Arc::new(EventLog::default());
        container.register_instance(second_log.clone()).unwrap();

        let second = Arc::new(Mutex::new(Probe::new("b")));
        container.request_injection(second.clone()).unwrap();

        // The recorded first resolution wins over the rebind.
        assert!(Arc::ptr_eq(second.lock().log.as_ref().unwrap(), &first_log));
        assert_eq!(*first_log.entries.lock(), vec!["a", "b"]);
        assert!(second_log.entries.lock().is_empty());
    }

    #[test]
    fn fresh_policy_resolves_per_dependent() {
        let first_log = Arc::new(EventLog::default());
        let mut container = Container::new().allow_rebind(true);
        container.register_instance(first_log.clone()).unwrap();
        container.make_ready().unwrap();

        let first = Arc::new(Mutex::new(Probe::new("a")));
        container.request_injection(first).unwrap();

        let second_log = Arc::new(EventLog::default());
        container.register_instance(second_log.clone()).unwrap();

        let second = Arc::new(Mutex::new(Probe::new("b")));
        container.request_injection(second.clone()).unwrap();

        assert!(Arc::ptr_eq(second.lock().log.as_ref().unwrap(), &second_log));
        assert_eq!(*second_log.entries.lock(), vec!["b"]);
    }

    #[test]
    fn disposed_container_rejects_everything() {
        let mut container = Container::new();
        container.register::<EventLog>().unwrap();
        container
            .request_injection(Arc::new(Mutex::new(Probe::new("lost"))))
            .unwrap();
        container.dispose();
        container.dispose();

        assert_eq!(container.state(), ContainerState::Disposed);
        let debug = format!("{container:?}");
        assert!(debug.contains("bindings: 0"));
        assert!(debug.contains("queued: 0"));

        assert!(matches!(
            container.request_injection(Arc::new(Mutex::new(Probe::new("late")))),
            Err(WeirError::Disposed(_))
        ));
        assert!(matches!(
            container.register::<EventLog>(),
            Err(WeirError::Disposed(_))
        ));
        assert!(matches!(
            container.resolve::<EventLog>(),
            Err(WeirError::Disposed(_))
        ));
        assert!(matches!(
            container.make_ready(),
            Err(WeirError::Disposed(_))
        ));
    }

    #[test]
    fn request_or_skip_without_container_skips() {
        let outcome =
            request_or_skip(None, Arc::new(Mutex::new(Probe::new("nowhere")))).unwrap();
        assert_eq!(outcome, InjectionOutcome::Skipped);
    }

    #[test]
    fn request_or_skip_with_container_delegates() {
        let mut container = Container::new();
        let outcome = request_or_skip(
            Some(&mut container),
            Arc::new(Mutex::new(Probe::new("routed"))),
        )
        .unwrap();
        assert_eq!(outcome, InjectionOutcome::Queued);
    }

    #[test]
    fn register_impl_binds_trait_to_implementation() {
        let mut container = Container::new();
        container.register_impl::<dyn Logger, NullLogger>().unwrap();
        container.make_ready().unwrap();

        let needs = Arc::new(Mutex::new(NeedsLogger { logger: None }));
        container.request_injection(needs.clone()).unwrap();
        assert!(needs.lock().logger.is_some());
    }

    // ── Hosted registration ──

    struct AudioPlayer {
        volume: u8,
    }

    impl HostComponent for AudioPlayer {
        fn spawn() -> Arc<Self> {
            Arc::new(AudioPlayer { volume: 50 })
        }
    }

    #[derive(Default)]
    struct StubHost {
        live: Mutex<HashMap<TypeId, ServiceRef>>,
        adopted: AtomicU32,
    }

    impl Host for StubHost {
        fn find_live(&self, ty: TypeId) -> Option<ServiceRef> {
            self.live.lock().get(&ty).cloned()
        }

        fn adopt(&self, ty: TypeId, spawn: &dyn Fn() -> ServiceRef) -> ServiceRef {
            self.adopted.fetch_add(1, Ordering::SeqCst);
            let spawned = spawn();
            self.live.lock().insert(ty, spawned.clone());
            spawned
        }
    }

    #[test]
    fn hosted_registration_reuses_a_live_object() {
        let host = Arc::new(StubHost::default());
        let live = Arc::new(AudioPlayer { volume: 80 });
        host.live.lock().insert(
            TypeId::of::<AudioPlayer>(),
            ServiceRef::new(live.clone()),
        );

        let mut container = Container::new().with_host(host.clone());
        container.register_hosted::<AudioPlayer, AudioPlayer>().unwrap();
        container.make_ready().unwrap();

        let resolved = container.resolve::<AudioPlayer>().unwrap();
        assert!(Arc::ptr_eq(&live, &resolved));
        assert_eq!(host.adopted.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn hosted_registration_adopts_when_nothing_is_live() {
        let host = Arc::new(StubHost::default());
        let mut container = Container::new().with_host(host.clone());
        container.register_hosted::<AudioPlayer, AudioPlayer>().unwrap();
        container.make_ready().unwrap();

        let resolved = container.resolve::<AudioPlayer>().unwrap();
        assert_eq!(resolved.volume, 50);
        assert_eq!(host.adopted.load(Ordering::SeqCst), 1);

        // The adopted object is now live in the host.
        assert!(host.find_live(TypeId::of::<AudioPlayer>()).is_some());
    }

    #[test]
    fn hosted_registration_without_host_fails() {
        let mut container = Container::new();
        let err = container
            .register_hosted::<AudioPlayer, AudioPlayer>()
            .unwrap_err();
        assert!(matches!(err, WeirError::HostMissing(_)));
    }
}
