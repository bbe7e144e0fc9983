//! Host settings: server hostname and URL-scheme configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::field::overlay;
use crate::group::FieldGroup;
use crate::source::RawConfig;

/// Host-facing settings: the externally reachable hostname, the scheme used
/// when building URLs, and whether TLS is terminated upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSettingsFieldGroup {
    /// Whether TLS is terminated before traffic reaches the application
    /// (load balancer or ingress).
    #[serde(rename = "EXTERNAL_TLS_TERMINATION", default)]
    pub external_tls_termination: bool,

    /// Scheme used when building URLs for this host.
    #[serde(
        rename = "PREFERRED_URL_SCHEME",
        default = "default_preferred_url_scheme"
    )]
    pub preferred_url_scheme: String,

    /// Externally reachable hostname of the server.
    #[serde(rename = "SERVER_HOSTNAME", default)]
    pub server_hostname: String,
}

fn default_preferred_url_scheme() -> String {
    "http".to_string()
}

impl Default for HostSettingsFieldGroup {
    fn default() -> Self {
        Self {
            external_tls_termination: false,
            preferred_url_scheme: default_preferred_url_scheme(),
            server_hostname: String::new(),
        }
    }
}

impl FieldGroup for HostSettingsFieldGroup {
    fn name() -> &'static str {
        "HostSettings"
    }

    fn fields() -> &'static [&'static str] {
        &[
            "EXTERNAL_TLS_TERMINATION",
            "PREFERRED_URL_SCHEME",
            "SERVER_HOSTNAME",
        ]
    }

    fn load(raw: &RawConfig) -> Result<Self, ConfigError> {
        let mut group = Self::default();
        overlay(
            raw,
            "EXTERNAL_TLS_TERMINATION",
            &mut group.external_tls_termination,
        )?;
        overlay(raw, "PREFERRED_URL_SCHEME", &mut group.preferred_url_scheme)?;
        overlay(raw, "SERVER_HOSTNAME", &mut group.server_hostname)?;
        Ok(group)
    }
}
