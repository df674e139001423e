use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_STATUS_POLL_SECONDS: u32 = 30;

/// Runtime configuration handed from the host server to the browser client
/// through `GET /forge-config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_base_url: String,
    /// How often the status board refetches `/machinestatus`.
    #[serde(default = "default_poll")]
    pub status_poll_seconds: u32,
}

fn default_poll() -> u32 {
    DEFAULT_STATUS_POLL_SECONDS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            status_poll_seconds: DEFAULT_STATUS_POLL_SECONDS,
        }
    }
}

impl ClientConfig {
    /// Joins `path` onto the API base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let config = ClientConfig {
            api_base_url: "https://forge.example/api/".to_string(),
            status_poll_seconds: 5,
        };
        assert_eq!(config.endpoint("/machinestatus"), "https://forge.example/api/machinestatus");
        assert_eq!(config.endpoint("use/m1/schema"), "https://forge.example/api/use/m1/schema");
    }

    #[test]
    fn poll_interval_defaults_when_missing() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_base_url":"http://x/api"}"#).unwrap();
        assert_eq!(config.status_poll_seconds, DEFAULT_STATUS_POLL_SECONDS);
    }
}
