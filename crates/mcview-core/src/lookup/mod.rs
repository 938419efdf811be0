//! Profile lookup over HTTP.
//!
//! Uses the curl crate (libcurl) for a single GET against the lookup proxy.
//! No retries: any failure is reported once and the caller shows it.

mod error;

pub use error::{LookupError, NOT_FOUND_MESSAGE};

use std::time::Duration;

use crate::config::HttpConfig;
use crate::profile::ProfileRecord;

/// Source of profile records. The search session issues exactly one
/// `fetch` per accepted submission.
pub trait ProfileFetcher {
    fn fetch(&self, url: &str) -> Result<ProfileRecord, LookupError>;
}

impl<F: ProfileFetcher + ?Sized> ProfileFetcher for &F {
    fn fetch(&self, url: &str) -> Result<ProfileRecord, LookupError> {
        (**self).fetch(url)
    }
}

/// Blocking libcurl fetcher. Call from `spawn_blocking` when used from async code.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: String,
}

impl CurlFetcher {
    pub fn new(http: &HttpConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(http.connect_timeout_secs),
            timeout: Duration::from_secs(http.timeout_secs),
            user_agent: http
                .user_agent
                .clone()
                .unwrap_or_else(|| format!("mcview/{}", env!("CARGO_PKG_VERSION"))),
        }
    }

    /// GETs `url` and returns the status code and raw body.
    fn get(&self, url: &str) -> Result<(u32, Vec<u8>), LookupError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(5)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(&self.user_agent)?;

        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

impl ProfileFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<ProfileRecord, LookupError> {
        tracing::debug!("GET {}", url);
        let (code, body) = self.get(url)?;
        if !(200..300).contains(&code) {
            tracing::info!("lookup {} returned HTTP {}", url, code);
            return Err(LookupError::NotFound { status: code });
        }
        parse_profile(&body)
    }
}

/// Parses a successful lookup body.
pub fn parse_profile(body: &[u8]) -> Result<ProfileRecord, LookupError> {
    let text = std::str::from_utf8(body).map_err(|e| LookupError::Body(e.to_string()))?;
    Ok(serde_json::from_str(text)?)
}
