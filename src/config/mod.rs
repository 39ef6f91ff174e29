//! Settings resolution and validation.
//!
//! [`Settings`] is the immutable snapshot of everything the launcher
//! needs, taken once from the parsed CLI arguments (which in turn carry
//! the environment variable values). Empty strings behave as unset,
//! matching how the dashboard itself treats its variables. Submodules
//! provide the service-binding payload model and the authentication
//! validation logic.

pub mod validation;
pub mod vcap;

use crate::broker;
use crate::cli::SettingsArgs;
use crate::error::FloristError;
use vcap::VcapServices;

/// Which source supplied the broker base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokerSource {
    ServiceBinding,
    Environment,
}

impl BrokerSource {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ServiceBinding => "service binding",
            Self::Environment => "environment",
        }
    }
}

/// Resolved broker connection: base URL, where it came from, and the
/// database index.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub base_url: String,
    pub source: BrokerSource,
    pub db: u32,
}

impl BrokerConfig {
    /// Fully composed broker connection URL.
    #[must_use]
    pub fn url(&self) -> String {
        broker::compose(&self.base_url, self.db)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub basic_auth: Option<String>,
    pub auth_provider: Option<String>,
    pub email_whitelist: Vec<String>,
    pub vcap_services: Option<String>,
    pub redis_base_url: Option<String>,
    pub broker_db: u32,
}

impl Settings {
    /// Take a settings snapshot from the parsed CLI arguments.
    #[must_use]
    pub fn from_args(args: &SettingsArgs) -> Self {
        Self {
            basic_auth: non_empty(args.basic_auth.as_deref()),
            auth_provider: non_empty(args.auth_provider.as_deref()),
            email_whitelist: normalize_whitelist(&args.email_whitelist),
            vcap_services: non_empty(args.vcap_services.as_deref()),
            redis_base_url: non_empty(args.redis_base_url.as_deref()),
            broker_db: args.broker_db,
        }
    }

    /// Resolve the broker connection.
    ///
    /// Two-source resolution: the service-binding payload wins over the
    /// plain variable when both are present. Fails when the payload is
    /// malformed or when neither source supplies a base URL.
    pub fn broker(&self) -> Result<BrokerConfig, FloristError> {
        if let Some(ref raw) = self.vcap_services {
            let services = VcapServices::parse(raw)?;
            if let Some(uri) = services.redis_uri() {
                return Ok(BrokerConfig {
                    base_url: uri.to_string(),
                    source: BrokerSource::ServiceBinding,
                    db: self.broker_db,
                });
            }
        }

        match self.redis_base_url {
            Some(ref url) => Ok(BrokerConfig {
                base_url: url.clone(),
                source: BrokerSource::Environment,
                db: self.broker_db,
            }),
            None => Err(FloristError::NoBrokerUrl),
        }
    }

    /// Short label for the configured authentication setup.
    #[must_use]
    pub fn auth_mode(&self) -> &'static str {
        match (&self.basic_auth, &self.auth_provider) {
            (Some(_), Some(_)) => "basic+provider",
            (Some(_), None) => "basic",
            (None, Some(_)) => "provider",
            (None, None) => "none",
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

fn normalize_whitelist(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VCAP: &str = r#"{
        "redis": [
            {
                "label": "redis",
                "plan": "small",
                "credentials": { "uri": "rediss://vcap.example:6380", "password": "p" }
            }
        ],
        "postgres": [
            { "credentials": { "host": "db.example" } }
        ]
    }"#;

    #[test]
    fn service_binding_wins_over_plain_variable() {
        let settings = Settings {
            vcap_services: Some(VCAP.into()),
            redis_base_url: Some("redis://plain.example".into()),
            ..Default::default()
        };
        let broker = settings.broker().unwrap();
        assert_eq!(broker.base_url, "rediss://vcap.example:6380");
        assert_eq!(broker.source, BrokerSource::ServiceBinding);
    }

    #[test]
    fn plain_variable_used_without_binding() {
        let settings = Settings {
            redis_base_url: Some("redis://plain.example".into()),
            ..Default::default()
        };
        let broker = settings.broker().unwrap();
        assert_eq!(broker.base_url, "redis://plain.example");
        assert_eq!(broker.source, BrokerSource::Environment);
    }

    #[test]
    fn payload_without_redis_entry_falls_back() {
        let settings = Settings {
            vcap_services: Some(r#"{"postgres": []}"#.into()),
            redis_base_url: Some("redis://plain.example".into()),
            ..Default::default()
        };
        let broker = settings.broker().unwrap();
        assert_eq!(broker.source, BrokerSource::Environment);
    }

    #[test]
    fn missing_both_sources_fails() {
        let settings = Settings::default();
        assert!(matches!(
            settings.broker(),
            Err(FloristError::NoBrokerUrl)
        ));
    }

    #[test]
    fn malformed_payload_fails() {
        let settings = Settings {
            vcap_services: Some("{not json".into()),
            redis_base_url: Some("redis://plain.example".into()),
            ..Default::default()
        };
        assert!(matches!(
            settings.broker(),
            Err(FloristError::VcapParse { .. })
        ));
    }

    #[test]
    fn broker_url_includes_db_index() {
        let settings = Settings {
            redis_base_url: Some("redis://localhost".into()),
            broker_db: 1,
            ..Default::default()
        };
        assert_eq!(settings.broker().unwrap().url(), "redis://localhost/1?");
    }

    #[test]
    fn empty_strings_behave_as_unset() {
        let args = SettingsArgs {
            basic_auth: Some(String::new()),
            auth_provider: Some(String::new()),
            email_whitelist: vec![" ".into(), String::new()],
            vcap_services: Some(String::new()),
            redis_base_url: Some(String::new()),
            broker_db: 0,
        };
        let settings = Settings::from_args(&args);
        assert!(settings.basic_auth.is_none());
        assert!(settings.auth_provider.is_none());
        assert!(settings.email_whitelist.is_empty());
        assert!(settings.vcap_services.is_none());
        assert!(settings.redis_base_url.is_none());
    }

    #[test]
    fn whitelist_entries_are_trimmed() {
        let args = SettingsArgs {
            basic_auth: None,
            auth_provider: None,
            email_whitelist: vec!["a@x.com ".into(), String::new(), " b@y.com".into()],
            vcap_services: None,
            redis_base_url: None,
            broker_db: 0,
        };
        let settings = Settings::from_args(&args);
        assert_eq!(settings.email_whitelist, vec!["a@x.com", "b@y.com"]);
    }
}
