// Configuration module entry point
// Loads layered configuration and owns shared runtime state

mod state;
mod types;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig, StaticAssetsConfig,
};

impl Config {
    /// Load configuration from the default `render.toml` location.
    /// The `PORT` environment variable overrides `server.port`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("render", std::env::var("PORT").ok())
    }

    /// Load configuration from specified file path (without extension),
    /// with an optional listening-port override applied last.
    pub fn load_from(
        config_path: &str,
        port_override: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("RENDER").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("static_assets.dir", "../frontend")?
            .set_default("static_assets.index_file", "index.html")?
            .set_default("http.enable_cors", true)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_override_option("server.port", port_override)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Resolve the static asset directory to a canonical path.
    /// A missing or non-directory path is a startup error.
    pub fn resolve_asset_dir(&self) -> Result<PathBuf, String> {
        let dir = Path::new(&self.static_assets.dir);
        let canonical = dir.canonicalize().map_err(|e| {
            format!(
                "Static asset directory '{}' not accessible: {e}",
                self.static_assets.dir
            )
        })?;
        if !canonical.is_dir() {
            return Err(format!(
                "Static asset path '{}' is not a directory",
                self.static_assets.dir
            ));
        }
        Ok(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_config_file() {
        let cfg = Config::load_from("no-such-config-file", None).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.static_assets.dir, "../frontend");
        assert_eq!(cfg.static_assets.index_file, "index.html");
        assert!(cfg.http.enable_cors);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
    }

    #[test]
    fn port_override_wins() {
        let cfg = Config::load_from("no-such-config-file", Some("9005".to_string())).unwrap();
        assert_eq!(cfg.server.port, 9005);
    }

    #[test]
    fn socket_addr_from_defaults() {
        let cfg = Config::load_from("no-such-config-file", None).unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 8000);
    }

    #[test]
    fn missing_asset_dir_is_an_error() {
        let mut cfg = Config::load_from("no-such-config-file", None).unwrap();
        cfg.static_assets.dir = "/no/such/asset/dir".to_string();
        assert!(cfg.resolve_asset_dir().is_err());
    }
}
