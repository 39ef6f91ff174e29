//! Optional Sentry error tracking integration.
//!
//! Initializes the Sentry SDK with the provided DSN and environment
//! tag. Traces are sampled at full rate; the launcher lives for
//! milliseconds, so there is nothing to downsample. The returned guard
//! must be held until the process handoff so that startup errors are
//! flushed before exec.

pub fn init(dsn: &str, environment: Option<&str>) -> sentry::ClientInitGuard {
    let parsed_dsn = match dsn.parse() {
        Ok(d) => Some(d),
        Err(e) => {
            tracing::warn!(error = %e, "invalid Sentry DSN, error tracking disabled");
            None
        }
    };

    sentry::init(sentry::ClientOptions {
        dsn: parsed_dsn,
        environment: environment.map(|e| e.to_string().into()),
        release: Some(env!("CARGO_PKG_VERSION").into()),
        traces_sample_rate: 1.0,
        ..Default::default()
    })
}
