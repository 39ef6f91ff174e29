//! Service-binding payload parsing.
//!
//! Hosting platforms that bind backing services inject a JSON payload
//! describing each bound service and its credentials. Only the `redis`
//! entry is consulted here; its first binding's connection URI supplies
//! the broker base URL. Everything else in the payload is ignored.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::FloristError;

/// Parsed service-binding payload, keyed by service type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct VcapServices {
    services: HashMap<String, Vec<ServiceBinding>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceBinding {
    #[serde(default)]
    pub credentials: Credentials,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub uri: Option<String>,
}

impl VcapServices {
    pub fn parse(raw: &str) -> Result<Self, FloristError> {
        serde_json::from_str(raw).map_err(|e| FloristError::VcapParse {
            source: Box::new(e),
        })
    }

    /// Connection URI of the first `redis` binding, if any.
    #[must_use]
    pub fn redis_uri(&self) -> Option<&str> {
        self.services
            .get("redis")
            .and_then(|bindings| bindings.first())
            .and_then(|binding| binding.credentials.uri.as_deref())
    }
}
