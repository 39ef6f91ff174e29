//! `florist run` — configure the environment and start Flower.
//!
//! Startup is linear and run-to-completion: diagnostics first, then
//! authentication, then the broker URL, then the process handoff. A
//! configuration error aborts before any child process is started.

use crate::cli::RunArgs;
use crate::config::{validation, Settings};
use crate::error::FloristError;
use crate::launch;
use crate::logging;

pub fn execute(args: &RunArgs) -> Result<(), FloristError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    #[cfg(feature = "sentry-integration")]
    let _sentry_guard = args
        .sentry_dsn
        .as_ref()
        .map(|dsn| crate::sentry_integration::init(dsn, args.sentry_environment.as_deref()));

    let settings = Settings::from_args(&args.settings);

    let whitelist_pattern = validation::validate_auth(&settings)?;
    if whitelist_pattern.is_some() {
        tracing::info!(
            emails = settings.email_whitelist.len(),
            "email whitelist compiled"
        );
    }

    let broker = settings.broker()?;
    let broker_url = broker.url();

    tracing::info!(
        source = broker.source.name(),
        db = broker.db,
        auth = settings.auth_mode(),
        program = %args.flower_bin,
        "starting flower"
    );

    let env = launch::environment(
        &broker_url,
        whitelist_pattern.as_deref(),
        settings.basic_auth.as_deref(),
        settings.auth_provider.as_deref(),
    );

    launch::exec(&args.flower_bin, &args.flower_args, &env)
}
