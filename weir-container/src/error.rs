//! Error types for Weir container operations.
//!
//! Errors carry enough context to act on: the unmet type, who needed it,
//! and close matches among the bound services.

use std::fmt;

use weir_support::rendering::shorten_type_name;

use crate::key::ServiceKey;

/// Main error type for all Weir operations.
#[derive(Debug, thiserror::Error)]
pub enum WeirError {
    /// An injection could not be completed because a required service has
    /// no binding.
    #[error("{}", .0)]
    MissingDependency(MissingDependencyError),

    /// A binding already exists for the type (and rebinding is rejected).
    #[error("{}", .0)]
    AlreadyBound(AlreadyBoundError),

    /// The container was torn down and no longer accepts requests.
    #[error("{}", .0)]
    Disposed(DisposedError),

    /// A hosted registration was attempted on a container without a host.
    #[error("{}", .0)]
    HostMissing(HostMissingError),

    /// An injection table disagrees with the method it describes.
    #[error("{}", .0)]
    Wiring(WiringError),
}

/// Internal signal that a requested type has no registry binding.
///
/// Translated into [`MissingDependencyError`] before it reaches callers;
/// only the registry itself returns this type.
#[derive(Debug, thiserror::Error)]
#[error("no binding for {requested}")]
pub struct MissingServiceError {
    /// The service type that was requested.
    pub requested: ServiceKey,
}

/// Error when injection fails because a required service is unbound.
///
/// Names both the missing type and the dependent that needed it.
#[derive(Debug)]
pub struct MissingDependencyError {
    /// The service type that could not be resolved.
    pub requested: ServiceKey,
    /// The dependent type that declared the requirement, when known.
    pub dependent: Option<&'static str>,
    /// The injection method that declared it, when known.
    pub point: Option<&'static str>,
    /// Bound types that look like the requested one.
    pub suggestions: Vec<String>,
}

impl fmt::Display for MissingDependencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Missing dependency: {}",
            shorten_type_name(self.requested.type_name())
        )?;

        if let Some(dependent) = self.dependent {
            write!(f, "\n  Required by: {}", shorten_type_name(dependent))?;
            if let Some(point) = self.point {
                write!(f, " in `{point}`")?;
            }
        }

        if !self.suggestions.is_empty() {
            write!(f, "\n  Did you mean one of:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n    - {}", shorten_type_name(suggestion))?;
            }
        }

        write!(
            f,
            "\n  Hint: bind `{}` on the container before requesting injection",
            shorten_type_name(self.requested.type_name())
        )
    }
}

/// Error when a type already has a binding and rebinding is rejected.
#[derive(Debug)]
pub struct AlreadyBoundError {
    /// The key that is already bound.
    pub key: ServiceKey,
}

impl fmt::Display for AlreadyBoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Service already bound: {}",
            shorten_type_name(self.key.type_name()),
        )?;
        write!(
            f,
            "\n  Hint: call allow_rebind(true) on the container to replace bindings"
        )
    }
}

/// Error when an operation reaches a container after teardown.
#[derive(Debug)]
pub struct DisposedError {
    /// The operation that was rejected.
    pub operation: &'static str,
}

impl fmt::Display for DisposedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Container is disposed; {} rejected", self.operation)?;
        write!(
            f,
            "\n  Hint: create a fresh container instead of reusing a torn-down one"
        )
    }
}

/// Error when a hosted registration has no host to search.
#[derive(Debug)]
pub struct HostMissingError {
    /// The implementation type that needed the host.
    pub implementation: &'static str,
}

impl fmt::Display for HostMissingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No host attached; cannot locate or create {}",
            shorten_type_name(self.implementation),
        )?;
        write!(
            f,
            "\n  Hint: configure the container with with_host(..) before registering hosted components"
        )
    }
}

/// Error when an injection table does not match the dependent it describes.
#[derive(Debug)]
pub struct WiringError {
    /// The dependent (or implementation) type involved.
    pub dependent: &'static str,
    /// The injection point (or operation) that failed.
    pub point: &'static str,
    /// The type the table expected at that position.
    pub expected: &'static str,
}

impl fmt::Display for WiringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wiring fault in `{}` on {}: expected {}",
            self.point,
            shorten_type_name(self.dependent),
            shorten_type_name(self.expected),
        )
    }
}

/// Convenient Result type for Weir operations.
pub type Result<T> = std::result::Result<T, WeirError>;
