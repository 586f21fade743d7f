//! Tracing subscriber setup for the binary.

use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "ADDONCTL_LOG";

/// Install the stderr subscriber.
///
/// Filter precedence: `--verbose` > `ADDONCTL_LOG` > default "warn".
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    if tracing_subscriber::registry().with(layer.with_filter(filter)).try_init().is_err() {
        debug!("Global tracing subscriber already set; keeping it");
    }
}
