//! Site configuration parsed from page-level overrides.
//!
//! Defaults match the published page. The page head may override any value
//! with `<meta name="portfolio:<key>" content="...">`; the browser layer feeds
//! those tags through [`SiteConfig::from_lookup`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formsubmit.co/ajax/luizcgjunior2018@gmail.com";
pub const DEFAULT_CONTACT_EMAIL: &str = "luizcgjunior2018@gmail.com";
pub const DEFAULT_NARROW_BREAKPOINT_PX: u32 = 768;
pub const DEFAULT_TYPING_INTERVAL_MS: u64 = 55;

/// Prefix shared by every `<meta name=...>` override.
pub const META_PREFIX: &str = "portfolio:";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: expected an http(s) URL, got {value:?}")]
    InvalidUrl { key: &'static str, value: String },
    #[error("{key}: expected a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key}: expected an e-mail address, got {value:?}")]
    InvalidEmail { key: &'static str, value: String },
}

/// How long each transient status message stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDurations {
    pub invalid: Duration,
    pub success: Duration,
    pub failure: Duration,
    pub copied: Duration,
}

impl Default for StatusDurations {
    fn default() -> Self {
        Self {
            invalid: Duration::from_millis(3000),
            success: Duration::from_millis(4000),
            failure: Duration::from_millis(3500),
            copied: Duration::from_millis(1400),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub relay_endpoint: String,
    pub contact_email: String,
    pub narrow_breakpoint_px: u32,
    pub typing_interval: Duration,
    pub durations: StatusDurations,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_owned(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_owned(),
            narrow_breakpoint_px: DEFAULT_NARROW_BREAKPOINT_PX,
            typing_interval: Duration::from_millis(DEFAULT_TYPING_INTERVAL_MS),
            durations: StatusDurations::default(),
        }
    }
}

impl SiteConfig {
    /// Build config from a key lookup, falling back to defaults for absent keys.
    ///
    /// Recognized keys (without the `portfolio:` prefix):
    /// - `relay-endpoint`: mail relay URL
    /// - `contact-email`: address used by the copy button
    /// - `narrow-breakpoint`: viewport width (px) below which the carousel goes single-card
    /// - `typing-interval-ms`: delay between typed characters
    ///
    /// # Errors
    ///
    /// Returns the first malformed override encountered.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = non_blank(lookup("relay-endpoint")) {
            config.relay_endpoint = parse_url("relay-endpoint", value)?;
        }
        if let Some(value) = non_blank(lookup("contact-email")) {
            config.contact_email = parse_email("contact-email", value)?;
        }
        if let Some(value) = non_blank(lookup("narrow-breakpoint")) {
            config.narrow_breakpoint_px = u32::try_from(parse_positive("narrow-breakpoint", &value)?)
                .map_err(|_| ConfigError::InvalidNumber { key: "narrow-breakpoint", value })?;
        }
        if let Some(value) = non_blank(lookup("typing-interval-ms")) {
            config.typing_interval = Duration::from_millis(parse_positive("typing-interval-ms", &value)?);
        }

        Ok(config)
    }

    /// Like [`SiteConfig::from_lookup`], but logs and falls back to defaults on error.
    #[must_use]
    pub fn from_lookup_or_default<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match Self::from_lookup(lookup) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring page config overrides: {e}");
                Self::default()
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_url(key: &'static str, value: String) -> Result<String, ConfigError> {
    if value.starts_with("https://") || value.starts_with("http://") {
        Ok(value)
    } else {
        Err(ConfigError::InvalidUrl { key, value })
    }
}

fn parse_email(key: &'static str, value: String) -> Result<String, ConfigError> {
    if crate::state::contact::is_email_shaped(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidEmail { key, value })
    }
}

fn parse_positive(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber { key, value: value.to_owned() }),
    }
}
