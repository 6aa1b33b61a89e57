//! Telemetry helpers for applications embedding this crate.
//!
//! Tracing setup stays explicit and opt-in: hosts either call one of these
//! initializers or wire their own `tracing` subscriber and filters. Label
//! placement failures are reported at `error` level, skipped-label counts
//! at `warn`, geometry recomputation at `debug`.

/// Initializes a default `tracing` subscriber when the `telemetry` feature
/// is enabled, honoring `RUST_LOG` and falling back to `info`.
///
/// Returns `true` when initialization succeeds, `false` when nothing was
/// initialized (feature disabled, or the host application already set a
/// global subscriber).
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback("info")
}

/// Like [`init_default_tracing`], but with a caller-chosen fallback filter
/// directive for when `RUST_LOG` is unset (for example `"warn"` or
/// `"circular_chart_rs=debug"`).
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
