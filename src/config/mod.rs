// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::arguments::Arguments;
use crate::constants::{DEFAULT_MEDIA_SERVER, DEFAULT_MEDIA_URL, DEFAULT_SERVER};

fn default_server() -> String {
    DEFAULT_SERVER.to_string()
}

fn default_media_url() -> String {
    DEFAULT_MEDIA_URL.to_string()
}

fn default_media_server() -> String {
    DEFAULT_MEDIA_SERVER.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Image service base URL (default: http://localhost:8888)
    #[serde(default = "default_server")]
    pub server: String,

    /// HMAC security key; absent means unsigned `unsafe/` URLs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_key: Option<String>,

    /// Path prefix marking application-served media (default: /media/)
    #[serde(default = "default_media_url")]
    pub media_url: String,

    /// Location media-relative paths are served from
    /// (default: http://localhost:8000/media)
    #[serde(default = "default_media_server")]
    pub media_server: String,

    /// Default transformation arguments applied to every URL
    #[serde(default)]
    pub arguments: Arguments,

    /// Named argument presets selectable at the call site
    #[serde(default)]
    pub aliases: HashMap<String, Arguments>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: default_server(),
            security_key: None,
            media_url: default_media_url(),
            media_server: default_media_server(),
            arguments: Arguments::default(),
            aliases: HashMap::new(),
        }
    }
}

impl Config {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, String> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| e.to_string())?;

        // First, check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                )
            })?;
        }

        // Now perform the substitution (we know all vars exist)
        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap() // Safe because we checked above
        });

        serde_yaml::from_str(&substituted).map_err(|e| e.to_string())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.is_empty() {
            return Err("Server URL cannot be empty".to_string());
        }

        if !self.server.starts_with("http://") && !self.server.starts_with("https://") {
            return Err(format!(
                "Server URL '{}' must include an http:// or https:// scheme",
                self.server
            ));
        }

        if !self.media_url.starts_with('/') {
            return Err(format!(
                "Media URL '{}' must start with /",
                self.media_url
            ));
        }

        if self.media_server.is_empty() {
            return Err("Media server cannot be empty".to_string());
        }

        for name in self.aliases.keys() {
            if name.trim().is_empty() {
                return Err("Alias names cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server, "http://localhost:8888");
        assert!(config.security_key.is_none());
        assert_eq!(config.media_url, "/media/");
        assert_eq!(config.media_server, "http://localhost:8000/media");
        assert!(config.aliases.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_empty_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.server, "http://localhost:8888");
        assert_eq!(config.media_url, "/media/");
    }

    #[test]
    fn test_deserialize_custom_yaml() {
        let yaml = r#"
server: "https://thumbor.example.com"
security_key: "MY_SECURE_KEY"
media_url: "/uploads/"
media_server: "cdn.example.com/uploads"
arguments:
  smart: true
aliases:
  thumb-square:
    width: 300
    height: 300
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server, "https://thumbor.example.com");
        assert_eq!(config.security_key.as_deref(), Some("MY_SECURE_KEY"));
        assert_eq!(config.media_url, "/uploads/");
        assert_eq!(config.media_server, "cdn.example.com/uploads");
        assert_eq!(config.arguments.smart, Some(true));

        let alias = &config.aliases["thumb-square"];
        assert_eq!(alias.width, Some(300));
        assert_eq!(alias.height, Some(300));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("THUMBOR_URLS_TEST_KEY", "from-the-environment");
        let yaml = r#"
security_key: "${THUMBOR_URLS_TEST_KEY}"
"#;
        let config = Config::from_yaml_with_env(yaml).unwrap();
        assert_eq!(config.security_key.as_deref(), Some("from-the-environment"));
        std::env::remove_var("THUMBOR_URLS_TEST_KEY");
    }

    #[test]
    fn test_env_var_missing_is_an_error() {
        let yaml = r#"
security_key: "${THUMBOR_URLS_UNSET_VARIABLE}"
"#;
        let result = Config::from_yaml_with_env(yaml);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .contains("THUMBOR_URLS_UNSET_VARIABLE"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server: \"http://thumbor.internal:8888\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server, "http://thumbor.internal:8888");
    }

    #[test]
    fn test_from_file_missing_path_is_an_error() {
        let result = Config::from_file("/nonexistent/config.yaml");
        assert!(result.unwrap_err().contains("Failed to read config file"));
    }

    #[test]
    fn test_validate_rejects_empty_server() {
        let config = Config {
            server: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_scheme_less_server() {
        let config = Config {
            server: "localhost:8888".to_string(),
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("scheme"));
    }

    #[test]
    fn test_validate_rejects_relative_media_url() {
        let config = Config {
            media_url: "media/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("must start with /"));
    }
}
