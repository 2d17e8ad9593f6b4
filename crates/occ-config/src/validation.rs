use thiserror::Error;
use url::Url;

/// Validation errors for configured endpoints
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported URL scheme '{scheme}' in {url} (expected http or https)")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("Invalid API prefix '{0}': must start with '/'")]
    InvalidPrefix(String),
}

/// Validate a backend base URL
///
/// Base URLs must:
/// - Parse as an absolute URL
/// - Use the http or https scheme
///
/// Image fragments are appended verbatim, so a missing trailing slash is
/// accepted here and only logged.
pub fn validate_base_url(raw: &str) -> Result<Url, ValidationError> {
    let url = Url::parse(raw).map_err(|source| ValidationError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ValidationError::UnsupportedScheme {
            url: raw.to_string(),
            scheme: url.scheme().to_string(),
        });
    }

    if !raw.ends_with('/') {
        tracing::warn!(url = raw, "base URL has no trailing slash");
    }

    Ok(url)
}

/// Validate the OCC API prefix
///
/// An empty prefix is allowed; anything else must be an absolute path.
pub fn validate_prefix(prefix: &str) -> Result<(), ValidationError> {
    if prefix.is_empty() || prefix.starts_with('/') {
        Ok(())
    } else {
        Err(ValidationError::InvalidPrefix(prefix.to_string()))
    }
}
