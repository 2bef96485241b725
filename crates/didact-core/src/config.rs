//! Site configuration.
//!
//! Settings load from a TOML file in the platform config directory
//! (`~/.config/didact/config.toml` on Linux), with every field optional and
//! defaulted, and the backend URL overridable through the
//! `DIDACT_BACKEND_URL` environment variable. A missing file just means
//! defaults — a fresh checkout talks to a local backend with zero setup.
//!
//! ```toml
//! backend_url = "https://cms.example.com"
//! timeout_secs = 10
//! image_hosts = ["localhost", "*.supabase.co"]
//! ```

use std::path::Path;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::render::ImagePolicy;

/// Environment variable that overrides the configured backend URL.
pub const BACKEND_URL_ENV: &str = "DIDACT_BACKEND_URL";

/// Frontend settings: where the content API lives and which hosts may serve
/// images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the content API.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Request timeout for content API calls, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Hosts image blocks may load from; exact names or `*.domain`
    /// wildcard patterns. Site-relative image URLs always pass.
    #[serde(default = "default_image_hosts")]
    pub image_hosts: Vec<String>,
}

fn default_backend_url() -> String {
    "http://localhost:3000".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_image_hosts() -> Vec<String> {
    vec!["localhost".to_string(), "*.supabase.co".to_string()]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            timeout_secs: default_timeout_secs(),
            image_hosts: default_image_hosts(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from the default location, falling back to
    /// defaults when no file exists, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let config = Self::config_path().map_or_else(
            || Ok(Self::default()),
            |path| {
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            },
        )?;
        Ok(config.with_env_overrides(std::env::var(BACKEND_URL_ENV).ok()))
    }

    /// Load configuration from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("invalid config at {}: {e}", path.display())))
    }

    /// The image policy implied by the configured host list.
    #[must_use]
    pub fn image_policy(&self) -> ImagePolicy {
        ImagePolicy::allow_hosts(self.image_hosts.clone())
    }

    fn with_env_overrides(mut self, backend_url: Option<String>) -> Self {
        if let Some(value) = backend_url {
            if !value.is_empty() {
                self.backend_url = value;
            }
        }
        self
    }

    fn config_path() -> Option<std::path::PathBuf> {
        ProjectDirs::from("dev", "didact", "didact")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = SiteConfig::default();
        assert_eq!(config.backend_url, "http://localhost:3000");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.image_hosts.contains(&"*.supabase.co".to_string()));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "backend_url = \"https://cms.example.com\"").unwrap();

        let config = SiteConfig::load_from(file.path()).unwrap();
        assert_eq!(config.backend_url, "https://cms.example.com");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "backend_url = [not a string").unwrap();

        let err = SiteConfig::load_from(file.path()).unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn env_override_wins_when_set() {
        let config = SiteConfig::default()
            .with_env_overrides(Some("http://10.0.0.5:4000".to_string()));
        assert_eq!(config.backend_url, "http://10.0.0.5:4000");

        let config = SiteConfig::default().with_env_overrides(None);
        assert_eq!(config.backend_url, "http://localhost:3000");

        let config = SiteConfig::default().with_env_overrides(Some(String::new()));
        assert_eq!(config.backend_url, "http://localhost:3000");
    }
}
