//! Server configuration.

use std::path::PathBuf;

/// Listen port used when no override is configured.
pub const DEFAULT_PORT: u16 = 2022;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_DB_PATH: &str = "landing.sqlite3";

/// Where the RPC server listens and which database file it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl ServerConfig {
    /// `host:port` label used in logs.
    pub fn listen_label(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;

    #[test]
    fn default_listens_on_2022() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 2022);
        assert_eq!(config.listen_label(), "0.0.0.0:2022");
    }
}
