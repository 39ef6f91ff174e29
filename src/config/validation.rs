//! Authentication validation.
//!
//! One of two login setups must be configured before the dashboard is
//! started: a basic-auth credential, or an auth provider together with
//! an email whitelist. When a whitelist is present it is compiled into
//! the anchored pattern the dashboard matches sign-ins against.

use super::Settings;
use crate::error::FloristError;
use crate::whitelist;

/// Validate the authentication setup and compile the whitelist pattern
/// when one is configured.
///
/// Returns `Ok(None)` for a basic-auth-only setup; the dashboard then
/// relies on its own credential check. Fails with
/// [`FloristError::AuthNotConfigured`] when neither setup is complete.
pub fn validate_auth(settings: &Settings) -> Result<Option<String>, FloristError> {
    let has_provider_auth =
        settings.auth_provider.is_some() && !settings.email_whitelist.is_empty();

    if settings.basic_auth.is_none() && !has_provider_auth {
        return Err(FloristError::AuthNotConfigured);
    }

    if settings.email_whitelist.is_empty() {
        return Ok(None);
    }

    whitelist::compile(&settings.email_whitelist).map(Some)
}
