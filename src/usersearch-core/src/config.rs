use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Connection settings for one search service
#[derive(Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    pub url: String,
    #[serde(default)]
    pub access_token: String,

    /// Appended to `url`; empty means the service answers on the base URL
    #[serde(default)]
    pub search_path: String,

    #[serde(default = "default_token_header")]
    pub token_header: String,

    // Transport deadlines, 0 disables the whole-request deadline
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_token_header() -> String {
    "AccessToken".to_string()
}

fn default_timeout_ms() -> u64 {
    1000
}

fn default_connect_timeout_ms() -> u64 {
    500
}

fn default_user_agent() -> String {
    concat!("usersearch-rs/", env!("CARGO_PKG_VERSION")).to_string()
}

impl ClientConfig {
    pub fn new(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: access_token.into(),
            search_path: String::new(),
            token_header: default_token_header(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&contents)?;
        tracing::debug!(path, url = %config.url, "Loaded client config");
        Ok(config)
    }

    pub fn with_search_path(mut self, path: impl Into<String>) -> Self {
        self.search_path = path.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Whole-request deadline, `None` when `timeout_ms` is 0
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Base URL joined with the search path
    pub fn endpoint(&self) -> String {
        if self.search_path.is_empty() {
            return self.url.clone();
        }
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            self.search_path.trim_start_matches('/')
        )
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("access_token", &"<redacted>")
            .field("search_path", &self.search_path)
            .field("token_header", &self.token_header)
            .field("timeout_ms", &self.timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
