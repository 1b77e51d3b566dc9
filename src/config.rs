//! Server-mode configuration loaded from the environment.

use std::env;

/// Runtime configuration for server mode. CLI mode never reads this.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Base origin applied to shorten requests that carry no `base_url`,
    /// before falling back to the origin derived from the input URL.
    pub default_base_url: Option<String>,
    pub log_level: String,
    /// Log file path; empty or unset means console output.
    pub log_file: Option<String>,
}

impl Config {
    /// 从环境变量加载配置（.env 已由 main 提前加载）
    pub fn from_env() -> Self {
        Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            default_base_url: env::var("DEFAULT_BASE_URL").ok().filter(|s| !s.is_empty()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_file: env::var("LOG_FILE").ok().filter(|s| !s.is_empty()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
