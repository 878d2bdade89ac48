//! Server configuration.
//!
//! Built-in defaults overlaid with `HELPDESK_*` environment variables
//! (e.g. `HELPDESK_BIND_ADDR`, `HELPDESK_TOKEN_SECRET`).

use std::path::PathBuf;

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds.
    pub bind_addr: String,
    /// Path of the JSON data snapshot.
    pub data_path: PathBuf,
    /// HS256 signing secret for bearer tokens. Override in any real
    /// deployment.
    pub token_secret: String,
    /// JWT issuer (`iss` claim).
    pub token_issuer: String,
    /// Bearer token lifetime in seconds (default: 86_400 = 1 day).
    pub token_lifetime_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3001".into(),
            data_path: "helpdesk.json".into(),
            token_secret: "insecure-dev-secret".into(),
            token_issuer: "helpdesk".into(),
            token_lifetime_secs: 86_400,
        }
    }
}

impl ServerConfig {
    /// Load configuration: defaults, then environment overrides.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::prefixed("HELPDESK_"))
            .extract()
    }
}
