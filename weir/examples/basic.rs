//! Basic example of the Weir container lifecycle.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use weir::{Container, InjectionOutcome, share};

// === Services ===

trait Logger: Send + Sync {
    fn log(&self, msg: &str);
}

struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, msg: &str) {
        println!("[LOG] {msg}");
    }
}

#[derive(Default)]
struct GameClock {
    tick: AtomicU64,
}

impl GameClock {
    fn advance(&self) -> u64 {
        self.tick.fetch_add(1, Ordering::SeqCst) + 1
    }
}

// === A dependent managed by the host framework ===

#[derive(Default)]
struct Hud {
    clock: Option<Arc<GameClock>>,
    logger: Option<Arc<dyn Logger>>,
}

impl Hud {
    fn wire(&mut self, clock: Arc<GameClock>, logger: Arc<dyn Logger>) {
        logger.log("hud wired");
        self.clock = Some(clock);
        self.logger = Some(logger);
    }
}

weir::injection! {
    Hud {
        fn wire(GameClock, dyn Logger);
    }
}

fn main() -> weir::Result<()> {
    // Initialize tracing (logging)
    tracing_subscriber::fmt()
        .with_env_filter("weir_container=debug")
        .init();

    let mut container = Container::new();

    // Dependents may ask before the container is ready; they wait in line.
    let early = share(Hud::default());
    let outcome = container.request_injection(early.clone())?;
    assert_eq!(outcome, InjectionOutcome::Queued);

    container
        .register::<GameClock>()?
        .register_instance::<dyn Logger>(Arc::new(ConsoleLogger))?;

    container.on_ready(|container| {
        println!("✅ {container:?}");
    });

    // Readiness drains the queue in submission order.
    container.make_ready()?;

    // Later dependents inject on the spot.
    let late = share(Hud::default());
    assert_eq!(container.request_injection(late)?, InjectionOutcome::Injected);

    let clock = container.resolve::<GameClock>()?;
    println!("⏱ tick {}", clock.advance());

    container.dispose();
    println!("🎉 done");
    Ok(())
}
