//! Opt-in tracing setup for hosts embedding `kyros-portal`.
//!
//! The library only emits `tracing` events. Hosts install their own
//! subscriber or call [`init_default_tracing`].

/// Filter used when `RUST_LOG` is unset: state transitions only.
pub const DEFAULT_FILTER: &str = "kyros_portal=debug,warn";

/// Installs a compact `fmt` subscriber when the `telemetry` feature is on.
///
/// Returns `false` when the feature is off or the host already installed a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
