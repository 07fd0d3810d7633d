//! Command-line and environment configuration for the server.

use clap::Parser;
use std::path::PathBuf;

/// Runtime settings. Every flag can also come from the matching `PENGUINS_*` variable.
#[derive(Parser, Debug, Clone)]
#[clap(name = "penguin-server", about = "Serves the Penguin Explorer catalog")]
pub struct ServerConfig {
    /// Interface to bind.
    #[clap(long, env = "PENGUINS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// The port to listen on.
    #[clap(short, long, env = "PENGUINS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Path to the SQLite database holding the catalog. Created if missing.
    #[clap(long, env = "PENGUINS_DB", default_value = "penguins.sqlite")]
    pub db_path: PathBuf,

    /// Do not open a browser window once the server is up.
    #[clap(long, env = "PENGUINS_NO_BROWSER")]
    pub no_browser: bool,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["penguin-server"]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, PathBuf::from("penguins.sqlite"));
        assert!(!config.no_browser);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "penguin-server",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
            "--db-path",
            "/tmp/colony.sqlite",
            "--no-browser",
        ])
        .unwrap();
        assert_eq!(config.url(), "http://0.0.0.0:9000");
        assert_eq!(config.db_path, PathBuf::from("/tmp/colony.sqlite"));
        assert!(config.no_browser);
    }
}
