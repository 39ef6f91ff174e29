//! Downstream process handoff.
//!
//! Flower only reads its configuration from environment variables at
//! its own startup, so the launcher communicates through named
//! variables on the child process. The environment is assembled as an
//! explicit list of name/value pairs and handed to the process builder;
//! the launcher's own environment is never mutated.

use std::process::Command;

use crate::error::FloristError;

pub const BROKER_URL_VAR: &str = "CELERY_BROKER_URL";
pub const AUTH_PATTERN_VAR: &str = "FLOWER_AUTH";
pub const BASIC_AUTH_VAR: &str = "FLOWER_BASIC_AUTH";
pub const AUTH_PROVIDER_VAR: &str = "FLOWER_AUTH_PROVIDER";

/// Assemble the variables handed to the downstream process.
///
/// The broker URL is always present. The whitelist pattern is only set
/// when a whitelist was configured. Basic-auth and provider values are
/// forwarded when set, since they may have arrived as CLI flags rather
/// than through the environment the child would inherit.
#[must_use]
pub fn environment(
    broker_url: &str,
    whitelist_pattern: Option<&str>,
    basic_auth: Option<&str>,
    auth_provider: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut vars = vec![(BROKER_URL_VAR, broker_url.to_string())];

    if let Some(pattern) = whitelist_pattern {
        vars.push((AUTH_PATTERN_VAR, pattern.to_string()));
    }
    if let Some(credential) = basic_auth {
        vars.push((BASIC_AUTH_VAR, credential.to_string()));
    }
    if let Some(provider) = auth_provider {
        vars.push((AUTH_PROVIDER_VAR, provider.to_string()));
    }

    vars
}

/// Replace the current process with the downstream binary.
///
/// On Unix this is a true `exec` and only returns on failure. On other
/// platforms the child is spawned and waited on, and the launcher exits
/// with the child's status.
pub fn exec(
    program: &str,
    args: &[String],
    env: &[(&'static str, String)],
) -> Result<(), FloristError> {
    let mut command = Command::new(program);
    command.args(args);
    for (name, value) in env {
        command.env(name, value);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;

        // exec only returns on failure
        let source = command.exec();
        return Err(FloristError::Launch {
            program: program.to_string(),
            source,
        });
    }

    #[cfg(not(unix))]
    {
        let status = command.status().map_err(|source| FloristError::Launch {
            program: program.to_string(),
            source,
        })?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broker_url_is_always_present() {
        let env = environment("redis://localhost/0?", None, None, None);
        assert_eq!(env, vec![(BROKER_URL_VAR, "redis://localhost/0?".to_string())]);
    }

    #[test]
    fn whitelist_pattern_is_set_only_when_configured() {
        let env = environment(
            "redis://localhost/0?",
            Some(r"^(test@example\.com)$"),
            None,
            Some("flower.views.auth.GithubLoginHandler"),
        );
        assert!(env
            .iter()
            .any(|(k, v)| *k == AUTH_PATTERN_VAR && v == r"^(test@example\.com)$"));
        assert!(env
            .iter()
            .any(|(k, v)| *k == AUTH_PROVIDER_VAR && v == "flower.views.auth.GithubLoginHandler"));
        assert!(!env.iter().any(|(k, _)| *k == BASIC_AUTH_VAR));
    }

    #[test]
    fn basic_auth_is_forwarded() {
        let env = environment("redis://localhost/0?", None, Some("user:pass"), None);
        assert!(env
            .iter()
            .any(|(k, v)| *k == BASIC_AUTH_VAR && v == "user:pass"));
        assert!(!env.iter().any(|(k, _)| *k == AUTH_PATTERN_VAR));
    }

    #[test]
    fn exec_reports_missing_binary() {
        let env = environment("redis://localhost/0?", None, None, None);
        let err = exec("florist-test-binary-that-does-not-exist", &[], &env).unwrap_err();
        assert!(matches!(err, FloristError::Launch { .. }));
    }
}
