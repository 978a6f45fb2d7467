//! Log subscriber setup for hosts and demos.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects between debug and
/// info output for this crate. Fails if a global subscriber is already set.
pub fn init_logger(verbose: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cookpair=debug,info")
        } else {
            EnvFilter::new("cookpair=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
}
