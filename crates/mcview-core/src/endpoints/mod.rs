//! External service URL templates.
//!
//! Every per-player asset is an external image addressed by the profile's
//! UUID; nothing here performs a request.

mod base;

pub use base::{normalize_base, EndpointError};

use crate::config::McviewConfig;
use crate::pose::Pose;

/// Normalized base URLs of the lookup proxy and image services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    proxy_base: String,
    avatar_base: String,
    render_base: String,
    namelookup_base: String,
    avatar_size: u32,
}

impl Endpoints {
    pub fn from_config(cfg: &McviewConfig) -> Result<Self, EndpointError> {
        Ok(Self {
            proxy_base: normalize_base("proxy", &cfg.proxy_base_url)?,
            avatar_base: normalize_base("avatar", &cfg.avatar_base_url)?,
            render_base: normalize_base("render", &cfg.render_base_url)?,
            namelookup_base: normalize_base("namelookup", &cfg.namelookup_base_url)?,
            avatar_size: cfg.avatar_size,
        })
    }

    /// Same as the defaults but with a different lookup proxy.
    pub fn with_proxy(proxy_base: &str) -> Result<Self, EndpointError> {
        let cfg = McviewConfig {
            proxy_base_url: proxy_base.to_string(),
            ..McviewConfig::default()
        };
        Self::from_config(&cfg)
    }

    /// `{proxy}/mojang/{username}`; the username is inserted verbatim and
    /// must already be validated.
    pub fn lookup_url(&self, username: &str) -> String {
        format!("{}/mojang/{}", self.proxy_base, username)
    }

    pub fn avatar_url(&self, uuid: &str) -> String {
        format!(
            "{}/avatars/{}?size={}&overlay",
            self.avatar_base, uuid, self.avatar_size
        )
    }

    pub fn skin_render_url(&self, pose: Pose, uuid: &str) -> String {
        format!("{}/render/{}/{}/full", self.render_base, pose, uuid)
    }

    pub fn cape_url(&self, uuid: &str) -> String {
        format!("{}/capes/{}", self.avatar_base, uuid)
    }

    pub fn namelookup_url(&self, uuid: &str) -> String {
        format!("{}/search?q={}", self.namelookup_base, uuid)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        let cfg = McviewConfig::default();
        Self {
            proxy_base: cfg.proxy_base_url,
            avatar_base: cfg.avatar_base_url,
            render_base: cfg.render_base_url,
            namelookup_base: cfg.namelookup_base_url,
            avatar_size: cfg.avatar_size,
        }
    }
}
