//! Backend address configuration.
//!
//! The base URL is fixed at build time through the `API_BASE_URL`
//! environment variable, falling back to the local development backend.
//! Tests and the bootstrap can construct an [`ApiConfig`] explicitly.

/// Where the REST backend lives.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or("http://localhost:5000"))
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Join an absolute endpoint path onto the base address.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.url("/api/events"), "https://api.example.com/api/events");
    }

    #[test]
    fn default_points_at_local_backend() {
        let config = ApiConfig::default();
        assert!(config.base_url.starts_with("http"));
        assert!(!config.base_url.ends_with('/'));
    }
}
