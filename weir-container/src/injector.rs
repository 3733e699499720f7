//! The injector — turns a dependent into a fully-injected object.
//!
//! For each injection point in the dependent's wiring table, the injector
//! resolves every wanted service against the registry, then invokes the
//! point. All of a point's parameters resolve before it is invoked; the
//! first unresolvable parameter aborts the whole injection. Points already
//! invoked stay invoked — method side effects cannot be rolled back.

use std::any::TypeId;

use dashmap::DashMap;
use tracing::{debug, trace};

use crate::dependent::{Dependent, InjectionPoint};
use crate::error::{MissingDependencyError, MissingServiceError, Result, WeirError};
use crate::registry::{ServiceRef, ServiceRegistry};

/// Whether resolved argument values are shared across dependents of the
/// same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReusePolicy {
    /// Resolve every parameter afresh for each injected dependent.
    #[default]
    Fresh,
    /// Record the arguments resolved for the first dependent of a type and
    /// replay them for every later dependent of that type — even if the
    /// registry was rebound in between. Only sound while every injected
    /// service really is a process-wide singleton.
    Replay,
}

/// The arguments a type's first injection resolved, kept for replay.
struct RecordedInjection {
    points: Vec<(&'static InjectionPoint, Vec<ServiceRef>)>,
}

/// Resolves and invokes injection points, with optional per-type argument
/// replay.
///
/// The injector holds no registry of its own; every call names the registry
/// to resolve against, so independent containers never share state.
pub struct Injector {
    policy: ReusePolicy,
    recorded: DashMap<TypeId, RecordedInjection>,
}

impl Injector {
    /// Creates an injector with the given argument-reuse policy.
    pub fn new(policy: ReusePolicy) -> Self {
        Self {
            policy,
            recorded: DashMap::new(),
        }
    }

    /// Returns the argument-reuse policy.
    pub fn policy(&self) -> ReusePolicy {
        self.policy
    }

    /// Injects `dependent`, resolving its wiring table against `registry`.
    ///
    /// Fails with [`WeirError::MissingDependency`] on the first parameter
    /// type the registry cannot resolve; points invoked before the failure
    /// keep their side effects.
    pub fn inject(&self, dependent: &mut dyn Dependent, registry: &ServiceRegistry) -> Result<()> {
        let signature = dependent.signature();
        let type_id = dependent.as_any_mut().type_id();

        if self.policy == ReusePolicy::Replay {
            if let Some(recorded) = self.recorded.get(&type_id) {
                trace!(dependent = signature.type_name, "Replaying recorded injection");
                for (point, arguments) in &recorded.points {
                    (point.apply)(dependent.as_any_mut(), arguments)?;
                }
                return Ok(());
            }
        }

        let mut performed = Vec::with_capacity(signature.points.len());
        for point in signature.points {
            let mut arguments = Vec::with_capacity(point.wants.len());
            for want in point.wants {
                let key = want();
                let service = registry.resolve(&key).map_err(|missing| {
                    translate_missing(missing, signature.type_name, point.name, registry)
                })?;
                arguments.push(service);
            }
            (point.apply)(dependent.as_any_mut(), &arguments)?;
            performed.push((point, arguments));
        }

        debug!(
            dependent = signature.type_name,
            points = signature.points.len(),
            "Injected dependencies"
        );

        if self.policy == ReusePolicy::Replay {
            self.recorded
                .insert(type_id, RecordedInjection { points: performed });
        }

        Ok(())
    }
}

/// Attaches the dependent's identity and close-match suggestions to a
/// registry miss.
fn translate_missing(
    missing: MissingServiceError,
    dependent: &'static str,
    point: &'static str,
    registry: &ServiceRegistry,
) -> WeirError {
    let suggestions = registry.suggestions_for(&missing.requested);
    WeirError::MissingDependency(MissingDependencyError {
        requested: missing.requested,
        dependent: Some(dependent),
        point: Some(point),
        suggestions,
    })
}
