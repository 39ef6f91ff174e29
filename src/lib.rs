//! Florist is a launcher for the Flower task-monitoring dashboard.
//!
//! Flower reads its configuration from environment variables at its own
//! startup, so florist does its work up front: it validates that an
//! authentication method is configured, compiles the email whitelist into
//! the anchored pattern Flower matches sign-ins against, composes the
//! Celery broker URL from a service-binding payload or a plain base URL,
//! and then replaces itself with the Flower process, handing the resolved
//! values over as environment variables.
//!
//! # Architecture
//!
//! - [`broker`] -- Broker URL composition and credential redaction.
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//!   Every flag has an environment variable equivalent for container
//!   deployments.
//! - [`cmd`] -- Subcommand dispatch and execution (run, check, health).
//! - [`config`] -- Settings resolution, the service-binding payload
//!   model, and authentication validation.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`launch`] -- Child environment assembly and process handoff.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print
//!   output.
//! - [`whitelist`] -- Email whitelist compilation into an anchored
//!   alternation regex.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `sentry-integration` | Sentry error tracking |

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod broker;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod launch;
pub mod logging;
pub mod whitelist;

#[cfg(feature = "sentry-integration")]
pub mod sentry_integration;
