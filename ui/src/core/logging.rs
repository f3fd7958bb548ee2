//! Subscriber setup for native builds. The web launcher relies on the logger
//! Dioxus installs in the browser.

/// Default directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install a formatting subscriber filtered by `RUST_LOG`. Calling it twice is harmless.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let result = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .try_init();
    if let Err(err) = result {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init() {}
