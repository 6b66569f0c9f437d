use serde::{Deserialize, Serialize};

/// Endpoints for the three public services the lookup chains together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    /// Public-IP discovery service (returns `{"ip": "..."}`)
    #[serde(default = "default_ip_api")]
    pub ip_api: String,

    /// IP-geolocation service; the IP is appended as a path segment
    #[serde(default = "default_geo_api")]
    pub geo_api: String,

    /// ISS pass-prediction service; takes `lat`/`lon` query parameters
    #[serde(default = "default_pass_api")]
    pub pass_api: String,
}

fn default_ip_api() -> String {
    "https://api.ipify.org/?format=json".to_string()
}

fn default_geo_api() -> String {
    "https://freegeoip.app/json".to_string()
}

fn default_pass_api() -> String {
    "http://api.open-notify.org/iss-pass.json".to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ip_api: default_ip_api(),
            geo_api: default_geo_api(),
            pass_api: default_pass_api(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Per-request timeout applied to the shared HTTP client
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub endpoints: Endpoints,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout_secs(),
            endpoints: Endpoints::default(),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Read `path` if it exists, falling back to defaults otherwise.
    /// An unreadable or malformed file also falls back to defaults.
    pub fn load_or_default(path: &str) -> Self {
        if !std::path::Path::new(path).exists() {
            return Self::default();
        }
        Self::from_file(path).unwrap_or_default()
    }
}
