//! HTTP endpoint settings

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Port on 127.0.0.1
    /// Default: 9877
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared secret required as `X-Snipforge-Token`
    ///
    /// If empty, the server will accept unauthenticated requests.
    #[serde(default)]
    pub token: String,
}

fn default_port() -> u16 {
    9877
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
            token: String::new(),
        }
    }
}
