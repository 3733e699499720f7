//! # Weir — readiness-gated dependency injection for host-managed objects
//!
//! Objects created by an external framework declare their required services
//! through injection methods; Weir resolves those services from a type-keyed
//! registry and invokes the methods, queueing any dependent that asks before
//! the registry is ready.
//!
//! ```
//! use std::sync::Arc;
//! use weir::{Container, share};
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
//! weir::injection! {
//!     Hud {
//!         fn wire(GameClock);
//!     }
//! }
//!
//! # fn main() -> weir::Result<()> {
//! let mut container = Container::new();
//! container.request_injection(share(Hud::default()))?;
//! container.register::<GameClock>()?;
//! container.make_ready()?;
//! # Ok(())
//! # }
//! ```

pub use weir_container::*;
pub use weir_container::injection;
pub use weir_support::*;
