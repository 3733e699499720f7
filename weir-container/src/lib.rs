//! Core runtime for Weir dependency injection.
//!
//! Dependents declare their required services in compile-time wiring
//! tables; the [`Container`] resolves those services against a type-keyed
//! registry and invokes the injection methods — queueing any dependent
//! that asks before the registry is ready.

pub mod container;
pub mod dependent;
pub mod error;
pub mod host;
pub mod injector;
pub mod key;
pub mod registry;

pub use container::prelude;
pub use container::{Container, ContainerState, InjectionOutcome, request_or_skip};
pub use dependent::{
    Dependent, InjectionPoint, InjectionSignature, SharedDependent, share,
};
pub use error::{Result, WeirError};
pub use host::{Host, HostComponent};
pub use injector::{Injector, ReusePolicy};
pub use key::ServiceKey;
pub use registry::{IntoService, RebindPolicy, ServiceRef, ServiceRegistry};
