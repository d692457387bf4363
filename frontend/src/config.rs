use once_cell::sync::Lazy;
use webcraft_shared::constants::{SIMULATED_SUBMIT_DELAY_MS, SUBMIT_STATUS_DISMISS_MS};

/// Settings baked in at build time, e.g.
/// `WEBCRAFT_CONTACT_ENDPOINT=https://formspree.io/f/xyz trunk build --release`.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub contact_endpoint: Option<String>,
    pub log_level: log::Level,
    pub simulated_delay_ms: u32,
    pub status_dismiss_ms: u32,
}

pub static CONFIG: Lazy<SiteConfig> = Lazy::new(|| {
    SiteConfig::from_values(
        option_env!("WEBCRAFT_CONTACT_ENDPOINT"),
        option_env!("WEBCRAFT_LOG_LEVEL"),
    )
});

impl SiteConfig {
    fn from_values(endpoint: Option<&str>, log_level: Option<&str>) -> Self {
        let contact_endpoint = endpoint
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        let log_level = log_level
            .and_then(|raw| raw.trim().parse::<log::Level>().ok())
            .unwrap_or(log::Level::Info);

        Self {
            contact_endpoint,
            log_level,
            simulated_delay_ms: SIMULATED_SUBMIT_DELAY_MS,
            status_dismiss_ms: SUBMIT_STATUS_DISMISS_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_endpoint_means_none() {
        let config = SiteConfig::from_values(Some("  "), None);
        assert_eq!(config.contact_endpoint, None);
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_values_are_parsed() {
        let config = SiteConfig::from_values(Some("https://formspree.io/f/abc"), Some("debug"));
        assert_eq!(config.contact_endpoint.as_deref(), Some("https://formspree.io/f/abc"));
        assert_eq!(config.log_level, log::Level::Debug);
    }
}
