//! Run configuration for the scout binary.
//!
//! Loaded from a RON file when a path is given on the command line;
//! compiled-in defaults target the Habr article feed otherwise.

use std::path::Path;
use std::time::Duration;

use scout_engine::ListingSelectors;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Plain HTTP requests with spoofed browser headers.
    Direct,
    /// One long-lived headless Chrome session.
    Browser,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub card: String,
    pub title_link: String,
    pub date: String,
    pub teaser: String,
    pub tag: String,
    pub article_body: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        let defaults = ListingSelectors::default();
        Self {
            card: defaults.card,
            title_link: defaults.title_link,
            date: defaults.date,
            teaser: defaults.teaser,
            tag: defaults.tag,
            article_body: defaults.article_body,
        }
    }
}

impl From<SelectorConfig> for ListingSelectors {
    fn from(config: SelectorConfig) -> Self {
        Self {
            card: config.card,
            title_link: config.title_link,
            date: config.date,
            teaser: config.teaser,
            tag: config.tag,
            article_body: config.article_body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub listing_url: String,
    pub keywords: Vec<String>,
    pub backend: Backend,
    pub pacing_ms: u64,
    pub request_timeout_secs: u64,
    pub browser_wait_secs: u64,
    pub selectors: SelectorConfig,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            listing_url: "https://habr.com/ru/articles/".to_string(),
            keywords: vec![
                "дизайн".to_string(),
                "фото".to_string(),
                "web".to_string(),
                "python".to_string(),
            ],
            backend: Backend::Direct,
            pacing_ms: 500,
            request_timeout_secs: 30,
            browser_wait_secs: 10,
            selectors: SelectorConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: String,
        source: ron::error::SpannedError,
    },
}

impl ScoutConfig {
    /// Load from a RON file path, falling back to the compiled-in defaults
    /// when the file does not exist. A file that exists but does not parse
    /// is an error: a present-but-broken config likely means a typo the
    /// user wants to know about.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io { ref source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Load from a RON file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        ron::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn browser_wait(&self) -> Duration {
        Duration::from_secs(self.browser_wait_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::{Backend, ScoutConfig};

    #[test]
    fn defaults_reproduce_the_habr_run() {
        let config = ScoutConfig::default();
        assert_eq!(config.listing_url, "https://habr.com/ru/articles/");
        assert_eq!(config.keywords, ["дизайн", "фото", "web", "python"]);
        assert_eq!(config.backend, Backend::Direct);
        assert_eq!(config.pacing_ms, 500);
    }

    #[test]
    fn partial_ron_falls_back_to_defaults() {
        let config: ScoutConfig =
            ron::from_str(r#"(keywords: ["rust"], backend: browser)"#).unwrap();
        assert_eq!(config.keywords, ["rust"]);
        assert_eq!(config.backend, Backend::Browser);
        assert_eq!(config.listing_url, ScoutConfig::default().listing_url);
    }

    #[test]
    fn serialized_defaults_parse_back() {
        let config = ScoutConfig::default();
        let raw = ron::to_string(&config).unwrap();
        let parsed: ScoutConfig = ron::from_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let result: Result<ScoutConfig, _> = ron::from_str(r#"(backend: curl)"#);
        assert!(result.is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScoutConfig::load(&dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, super::ConfigError::Io { .. }));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScoutConfig::load_or_default(&dir.path().join("absent.ron")).unwrap();
        assert_eq!(config, ScoutConfig::default());
    }

    #[test]
    fn malformed_file_stays_fatal_with_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        std::fs::write(&path, "(listing_url: )").unwrap();
        let err = ScoutConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, super::ConfigError::Parse { .. }));
    }

    #[test]
    fn load_reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        std::fs::write(&path, "(listing_url: )").unwrap();
        let err = ScoutConfig::load(&path).unwrap_err();
        assert!(matches!(err, super::ConfigError::Parse { .. }));
    }
}
