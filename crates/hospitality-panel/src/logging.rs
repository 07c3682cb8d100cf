//! Tracing subscriber setup.
//!
//! Logs go to stderr so that stdout stays clean for `--output json` and
//! friends.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directive for a `-v` count when `RUST_LOG` is unset.
pub fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "hospitality_panel=info,warn",
        2 => "hospitality_panel=debug,info",
        _ => "trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `-v`.
///
/// A second call is a no-op.
pub fn init(verbosity: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    let result = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
