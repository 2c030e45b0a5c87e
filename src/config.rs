//! Build Configuration
//!
//! API location and owner id, fixed at build time:
//! `TODOS_API_URL=... TODOS_OWNER_ID=... trunk build`

/// API used when `TODOS_API_URL` is not set
pub const DEFAULT_API_URL: &str = "https://mate.academy/students-api";

/// How long an error notice stays visible
pub const NOTICE_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Owner scope for every request; 0 means not configured
    pub owner_id: u32,
}

impl ApiConfig {
    pub fn new(base_url: Option<&str>, owner_id: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        Self {
            base_url,
            owner_id: parse_owner_id(owner_id),
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(option_env!("TODOS_API_URL"), option_env!("TODOS_OWNER_ID"))
    }

    /// The app refuses to start without an owner to scope requests to
    pub fn is_configured(&self) -> bool {
        self.owner_id != 0
    }
}

fn parse_owner_id(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::new(None, None);
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new(Some("http://localhost:3000/api/"), Some(" 42 "));
        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(config.owner_id, 42);
        assert!(config.is_configured());
    }

    #[test]
    fn test_bad_owner_id_is_unconfigured() {
        assert_eq!(parse_owner_id(Some("abc")), 0);
        assert_eq!(parse_owner_id(Some("-1")), 0);
        assert!(!ApiConfig::new(Some(""), Some("0")).is_configured());
    }
}
