//! Dependent capability interface and compile-time wiring tables.
//!
//! A dependent declares its required services in a static
//! [`InjectionSignature`] instead of being scanned at runtime: each
//! [`InjectionPoint`] names one injection method, the ordered service types
//! it takes, and a function that invokes the real method with downcast
//! arguments. The [`injection!`](crate::injection) macro writes the
//! boilerplate from a one-line description of each method.

use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{Result, WeirError, WiringError};
use crate::key::ServiceKey;
use crate::registry::ServiceRef;

/// An object that receives services through its injection methods.
///
/// Implemented via [`injection!`](crate::injection); hand-written impls
/// work the same way when a table needs something the macro cannot express.
pub trait Dependent: Any + Send {
    /// The wiring table for this concrete type.
    fn signature(&self) -> &'static InjectionSignature;

    /// The dependent as `Any`, for typed invocation.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// The full wiring table of one dependent type.
pub struct InjectionSignature {
    /// The dependent's type name, as written at the wiring site.
    pub type_name: &'static str,
    /// Injection points, invoked in declaration order.
    pub points: &'static [InjectionPoint],
}

/// One injection method and the services it takes, in parameter order.
pub struct InjectionPoint {
    /// The method name, for diagnostics.
    pub name: &'static str,
    /// Key constructors for the required service types, in order.
    pub wants: &'static [fn() -> ServiceKey],
    /// Invokes the method on the dependent with resolved arguments.
    pub apply: ApplyFn,
}

/// Invocation shim: downcasts the dependent and each argument, then calls
/// the real method.
pub type ApplyFn = fn(&mut dyn Any, &[ServiceRef]) -> Result<()>;

/// A dependent behind a shared, lockable handle.
///
/// This is the shape the container queues before readiness: the host
/// framework keeps one clone, the pending queue keeps another, and the
/// injector locks it for the duration of one injection.
pub type SharedDependent = Arc<Mutex<dyn Dependent>>;

/// Wraps a dependent in a [`SharedDependent`] handle.
pub fn share<D: Dependent>(dependent: D) -> SharedDependent {
    Arc::new(Mutex::new(dependent))
}

/// Takes the next resolved argument as `Arc<S>`.
///
/// Used by generated apply functions; a miss here means the wiring table
/// disagrees with the method it describes.
pub fn next_argument<S: ?Sized + Send + Sync + 'static>(
    resolved: &mut std::slice::Iter<'_, ServiceRef>,
    dependent: &'static str,
    point: &'static str,
) -> Result<Arc<S>> {
    resolved
        .next()
        .and_then(|service| service.downcast::<S>())
        .ok_or_else(|| {
            WeirError::Wiring(WiringError {
                dependent,
                point,
                expected: std::any::type_name::<S>(),
            })
        })
}

/// Implements [`Dependent`] for a type from a description of its injection
/// methods.
///
/// Each listed method is an injection point; its parameters are the listed
/// service types, delivered as `Arc<S>` in order:
///
/// ```
/// use std::sync::Arc;
///
/// #[derive(Default)]
/// struct GameClock;
///
/// #[derive(Default)]
/// struct Hud {
///     clock: Option<Arc<GameClock>>,
/// }
///
/// impl Hud {
///     fn wire(&mut self, clock: Arc<GameClock>) {
///         self.clock = Some(clock);
///     }
/// }
///
/// weir_container::injection! {
///     Hud {
///         fn wire(GameClock);
///     }
/// }
/// ```
#[macro_export]
macro_rules! injection {
    ($ty:ty { $( fn $method:ident ( $( $service:ty ),* $(,)? ); )+ }) => {
        impl $crate::dependent::Dependent for $ty {
            fn signature(&self) -> &'static $crate::dependent::InjectionSignature {
                static SIGNATURE: $crate::dependent::InjectionSignature =
                    $crate::dependent::InjectionSignature {
                        type_name: ::std::stringify!($ty),
                        points: &[$(
                            $crate::dependent::InjectionPoint {
                                name: ::std::stringify!($method),
                                wants: &[$( $crate::key::ServiceKey::of::<$service> ),*],
                                apply: |target, resolved| {
                                    let ::std::option::Option::Some(this) =
                                        target.downcast_mut::<$ty>()
                                    else {
                                        return ::std::result::Result::Err(
                                            $crate::error::WeirError::Wiring(
                                                $crate::error::WiringError {
                                                    dependent: ::std::stringify!($ty),
                                                    point: ::std::stringify!($method),
                                                    expected: ::std::stringify!($ty),
                                                },
                                            ),
                                        );
                                    };
                                    #[allow(unused_mut, unused_variables)]
                                    let mut resolved = resolved.iter();
                                    this.$method($(
                                        $crate::dependent::next_argument::<$service>(
                                            &mut resolved,
                                            ::std::stringify!($ty),
                                            ::std::stringify!($method),
                                        )?
                                    ),*);
                                    ::std::result::Result::Ok(())
                                },
                            }
                        ),*],
                    };
                &SIGNATURE
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }
    };
}
