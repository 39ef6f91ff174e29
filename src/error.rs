//! Unified error types for florist.
//!
//! [`FloristError`] covers the two expected failure modes of a launch
//! (missing authentication, missing broker URL) plus the mechanical
//! failures of the auxiliary subcommands. Uses `thiserror` for the
//! `Display` and `Error` derives. Error messages include contextual
//! hints to guide the user toward a fix.

fn format_errors(errors: &[String]) -> String {
    errors.join("\n")
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FloristError {
    #[error(
        "Authentication is not configured.\n\n  \
         Set FLOWER_BASIC_AUTH, or both FLOWER_AUTH_PROVIDER and EMAIL_WHITELIST."
    )]
    AuthNotConfigured,

    #[error(
        "No broker base URL configured.\n\n  \
         Set REDIS_BASE_URL, or provide a VCAP_SERVICES payload with a redis binding."
    )]
    NoBrokerUrl,

    #[error("email whitelist must contain at least one address")]
    EmptyWhitelist,

    #[error("Invalid VCAP_SERVICES payload: {source}")]
    VcapParse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Configuration check failed:\n{}", format_errors(.errors))]
    CheckFailed { errors: Vec<String> },

    #[error("Invalid URI: {source}")]
    UriParse {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP request failed: {source}")]
    HttpRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Health check failed with status {0}")]
    HealthCheckFailed(hyper::StatusCode),

    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
