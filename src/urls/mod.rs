//! URL normalization and generation
//!
//! Builds fully-qualified signed URLs for the image service. Incoming
//! image references are normalized before signing, in order:
//!
//! 1. Paths under the configured media URL are rebased onto the media
//!    server: `/media/logo.png` -> `localhost:8000/media/logo.png`
//! 2. Absolute URLs lose their scheme: `http://a.com/i.jpg` -> `a.com/i.jpg`
//! 3. Bare domain paths pass through unchanged
//!
//! Rule 2 runs after rule 1, so a scheme-qualified media server is
//! stripped along with everything else.

use crate::arguments::Arguments;
use crate::config::Config;
use crate::crypto::Signer;
use crate::error::UrlError;

/// Generates signed image URLs from a loaded configuration
#[derive(Debug, Clone)]
pub struct UrlGenerator {
    config: Config,
    signer: Signer,
}

impl UrlGenerator {
    pub fn new(config: Config) -> Self {
        let signer = Signer::new(config.security_key.as_deref());
        Self { config, signer }
    }

    /// Generate a fully-qualified signed URL for `image_url`
    ///
    /// Arguments are resolved from the configured defaults, then the
    /// named alias (if any), then `overrides`, most specific last. The
    /// result is the service base URL followed by the signed path.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::UnknownAlias`] when `alias` names a preset
    /// that is not configured.
    pub fn generate(
        &self,
        image_url: &str,
        alias: Option<&str>,
        overrides: &Arguments,
    ) -> Result<String, UrlError> {
        let mut arguments = self.config.arguments.clone();
        if let Some(name) = alias {
            let preset = self
                .config
                .aliases
                .get(name)
                .ok_or_else(|| UrlError::UnknownAlias(name.to_string()))?;
            arguments = arguments.merged_with(preset);
        }
        let arguments = arguments.merged_with(overrides);

        let image_url = normalize_image_url(image_url, &self.config);
        let unsigned = arguments.to_path(&image_url);
        let signed = self.signer.signed_path(&unsigned);

        tracing::debug!(
            image_url = %image_url,
            path = %unsigned,
            "Generated image URL"
        );

        Ok(format!(
            "{}/{}",
            self.config.server.trim_end_matches('/'),
            signed
        ))
    }
}

/// Normalize an image reference into the host-qualified, scheme-less
/// form the service signs
pub fn normalize_image_url(url: &str, config: &Config) -> String {
    let rebased = if url.starts_with(&config.media_url) {
        let relative = &url[config.media_url.len()..];
        format!(
            "{}/{}",
            config.media_server.trim_end_matches('/'),
            relative.trim_start_matches('/')
        )
    } else {
        url.to_string()
    };

    strip_scheme(&rebased).to_string()
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .unwrap_or(url)
}
