//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, check, health), and their associated argument
//! structs. Every flag has an environment variable equivalent; the env
//! names match what the original deployment scripts exported, so an
//! existing container environment works unchanged.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "florist",
    version,
    about = "Launcher for the Flower task-monitoring dashboard",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        florist check                        Validate the environment without starting\n  \
        florist run                          Configure and start Flower\n  \
        florist run -- --port=5555           Pass extra arguments through to Flower"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure the environment and start Flower
    Run(Box<RunArgs>),

    /// Resolve and validate configuration without starting
    Check(CheckArgs),

    /// Check health of a running Flower instance
    Health(HealthArgs),
}

/// Settings shared by `run` and `check`: everything needed to resolve
/// the downstream configuration.
#[derive(Args)]
pub struct SettingsArgs {
    /// Basic-auth credential (user:password)
    #[arg(
        long,
        env = "FLOWER_BASIC_AUTH",
        hide_env_values = true,
        help_heading = "Authentication"
    )]
    pub basic_auth: Option<String>,

    /// Alternate auth handler identifier (e.g. flower.views.auth.GithubLoginHandler)
    #[arg(long, env = "FLOWER_AUTH_PROVIDER", help_heading = "Authentication")]
    pub auth_provider: Option<String>,

    /// Comma-separated list of emails allowed to sign in
    #[arg(
        long,
        env = "EMAIL_WHITELIST",
        value_delimiter = ',',
        help_heading = "Authentication"
    )]
    pub email_whitelist: Vec<String>,

    /// JSON service-binding payload supplying the broker URL
    #[arg(
        long,
        env = "VCAP_SERVICES",
        hide_env_values = true,
        help_heading = "Broker"
    )]
    pub vcap_services: Option<String>,

    /// Broker base URL used when no service binding is present
    #[arg(long, env = "REDIS_BASE_URL", help_heading = "Broker")]
    pub redis_base_url: Option<String>,

    /// Broker database index
    #[arg(
        long,
        env = "REDIS_BROKER_DB",
        default_value_t = 0,
        help_heading = "Broker"
    )]
    pub broker_db: u32,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        florist run                                        Configure from the environment\n  \
        florist run --redis-base-url redis://cache:6379    Explicit broker base\n  \
        florist run --pretty -l debug                      Local dev logging\n  \
        florist run -- --port=5555 --persistent=True       Forward flags to Flower")]
pub struct RunArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    // -- Observability --
    /// Sentry DSN (enables error tracking)
    #[cfg(feature = "sentry-integration")]
    #[arg(long, env = "SENTRY_DSN", help_heading = "Observability")]
    pub sentry_dsn: Option<String>,

    /// Sentry environment tag
    #[cfg(feature = "sentry-integration")]
    #[arg(long, env = "SENTRY_ENVIRONMENT", help_heading = "Observability")]
    pub sentry_environment: Option<String>,

    // -- Process --
    /// Downstream Flower binary to exec
    #[arg(
        long,
        env = "FLOWER_BIN",
        default_value = "flower",
        help_heading = "Process"
    )]
    pub flower_bin: String,

    /// Extra arguments passed through to the Flower binary
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub flower_args: Vec<String>,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: CheckFormat,
}

#[derive(Args)]
pub struct HealthArgs {
    /// URL of the running Flower instance
    #[arg(default_value = "http://localhost:5555")]
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum CheckFormat {
    Text,
    Json,
}
