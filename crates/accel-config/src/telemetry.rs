//! Log routing for the accelcfg resolver events.
//!
//! The resolver logs at three levels:
//!
//! - `warn!` with `board`, `requested` and `canonical` fields when
//!   `XilinxPart` is replaced by the board's part;
//! - `info!` with `board` when the default `AcceleratorConfig` is synthesized;
//! - `debug!` with both bitwidths once resolution succeeds.
//!
//! All of it goes to stderr, leaving stdout to the resolved config JSON.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr subscriber for resolver events.
///
/// `level` applies when `RUST_LOG` is unset; `Level::DEBUG` is needed to see
/// the resolved bitwidths. With `json` each event is one JSON object whose
/// `fields` carry the board and part values as separate keys.
///
/// Only the first call installs a subscriber.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}
