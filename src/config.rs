use thiserror::Error;

pub const DEFAULT_ADDR: &str = ":4000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid listen address '{0}', expected host:port or :port")]
    InvalidAddress(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address, `host:port` or `:port` for every interface
    pub addr: String,
    /// Level used for this crate when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADDR.to_string(), false)
    }
}

impl ServerConfig {
    pub fn new(addr: String, debug: bool) -> Self {
        let log_level = if debug { "debug" } else { "info" };
        Self {
            addr,
            log_level: log_level.to_string(),
        }
    }

    /// Address suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> Result<String, ConfigError> {
        let addr = self.addr.trim();

        let (host, port) = addr
            .rsplit_once(':')
            .ok_or_else(|| ConfigError::InvalidAddress(self.addr.clone()))?;

        if port.is_empty() || port.parse::<u16>().is_err() {
            return Err(ConfigError::InvalidAddress(self.addr.clone()));
        }

        if host.is_empty() {
            Ok(format!("0.0.0.0:{port}"))
        } else {
            Ok(addr.to_string())
        }
    }

    /// Default `EnvFilter` directives when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> String {
        format!("tag_articles={},tower_http=info", self.log_level)
    }
}
