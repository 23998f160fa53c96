//! Process configuration: `figment` layers defaults, an optional `mcb.toml`,
//! and environment variable overrides in the usual "defaults then file then
//! env" order, via `figment` directly rather than a hand-rolled YAML merge
//! (see `DESIGN.md`).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use mcb_domain::constants::DEFAULT_DB_DIRNAME;
use mcb_domain::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Process-wide configuration for the transports and store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Store directory name under each project root.
    #[serde(default = "default_db_dirname", alias = "db_filename")]
    pub db_dirname: String,
    /// Duplex transport port (unused by stdio, reserved for a future TCP
    /// duplex listener).
    #[serde(default = "default_port")]
    pub port: u16,
    /// HTTP+SSE transport port.
    #[serde(default = "default_http_stream_port")]
    pub http_stream_port: u16,
    /// Bind host for the HTTP+SSE transport.
    #[serde(default = "default_host")]
    pub host: String,
    /// Log verbosity, `0` (errors only) through `4` (trace).
    #[serde(default = "default_debug")]
    pub debug: u8,
}

fn default_db_dirname() -> String {
    DEFAULT_DB_DIRNAME.to_string()
}
fn default_port() -> u16 {
    8090
}
fn default_http_stream_port() -> u16 {
    8091
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_debug() -> u8 {
    2
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            db_dirname: default_db_dirname(),
            port: default_port(),
            http_stream_port: default_http_stream_port(),
            host: default_host(),
            debug: default_debug(),
        }
    }
}

impl ServerConfig {
    /// Load configuration: defaults, then an optional `mcb.toml` in the
    /// current directory, then environment variable overrides
    /// (`DB_FILENAME`, `PORT`, `HTTP_STREAM_PORT`, `HOST`, `DEBUG` — matched
    /// case-insensitively against the field names above, `DB_FILENAME`
    /// landing on `db_dirname` via its serde alias).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if any layer fails to parse.
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file("mcb.toml"))
            .merge(Env::raw().only(&["DB_FILENAME", "PORT", "HTTP_STREAM_PORT", "HOST", "DEBUG"]))
            .extract()
            .map_err(|e| Error::invalid_argument(format!("invalid configuration: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable_standalone() {
        let config = ServerConfig::default();
        assert_eq!(config.db_dirname, DEFAULT_DB_DIRNAME);
        assert_eq!(config.host, "127.0.0.1");
    }
}
