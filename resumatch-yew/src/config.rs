/// Default request timeout (two minutes)
pub const DEFAULT_TIMEOUT_MS: u32 = 120_000;

/// Front-end configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Scoring endpoint, baked in at build time from `RESUMATCH_API_URL`
    pub api_url: String,

    /// Give up on a request after this long; `None` waits forever
    pub timeout_ms: Option<u32>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            api_url: env!("RESUMATCH_API_URL").to_string(),
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, ms: u32) -> Self {
        self.timeout_ms = Some(ms);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout_ms = None;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_build_time_url() {
        let config = Config::default();
        assert_eq!(config.api_url, env!("RESUMATCH_API_URL"));
        assert_eq!(config.timeout_ms, Some(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    fn test_builders() {
        let config = Config::new()
            .with_api_url("https://screening.example.com/api/screen")
            .with_timeout(5_000);
        assert_eq!(config.api_url, "https://screening.example.com/api/screen");
        assert_eq!(config.timeout_ms, Some(5_000));

        assert_eq!(config.without_timeout().timeout_ms, None);
    }
}
