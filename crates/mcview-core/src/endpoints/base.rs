//! Base URL normalization for external services.

/// Invalid base URL in configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    #[error("{service} base URL '{value}' is not a valid URL: {reason}")]
    Invalid {
        service: &'static str,
        value: String,
        reason: String,
    },
    #[error("{service} base URL '{value}' must use http or https")]
    UnsupportedScheme { service: &'static str, value: String },
}

/// Validates `value` as an absolute http(s) URL and strips trailing slashes
/// so templates can append `/path` directly.
pub fn normalize_base(service: &'static str, value: &str) -> Result<String, EndpointError> {
    let trimmed = value.trim();
    let parsed = url::Url::parse(trimmed).map_err(|e| EndpointError::Invalid {
        service,
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(EndpointError::UnsupportedScheme {
            service,
            value: value.to_string(),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
