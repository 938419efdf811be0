use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::view::LayoutMode;

/// Environment variable that overrides `proxy_base_url`.
pub const PROXY_BASE_ENV: &str = "MCVIEW_PROXY_BASE";

/// HTTP parameters for the profile lookup (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent sent with the lookup request.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

/// Global configuration loaded from `~/.config/mcview/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McviewConfig {
    /// Base URL of the profile lookup proxy; requests go to `{base}/mojang/{username}`.
    pub proxy_base_url: String,
    /// Base URL of the avatar/cape image service.
    pub avatar_base_url: String,
    /// Base URL of the 3D skin render service.
    pub render_base_url: String,
    /// Base URL of the name-lookup site linked from a profile.
    pub namelookup_base_url: String,
    /// Avatar edge length in pixels.
    pub avatar_size: u32,
    /// Profile card layout: "fixed" or "responsive".
    #[serde(default)]
    pub layout: LayoutMode,
    /// Optional HTTP settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for McviewConfig {
    fn default() -> Self {
        Self {
            proxy_base_url: "https://mojang-api-pi.vercel.app".to_string(),
            avatar_base_url: "https://crafatar.com".to_string(),
            render_base_url: "https://starlightskins.lunareclipse.studio".to_string(),
            namelookup_base_url: "https://es.namemc.com".to_string(),
            avatar_size: 100,
            layout: LayoutMode::default(),
            http: None,
        }
    }
}

impl McviewConfig {
    /// HTTP settings with defaults filled in.
    pub fn http(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }

    /// Applies `MCVIEW_PROXY_BASE` if it is set and non-empty.
    pub fn apply_env_override(&mut self) {
        self.apply_proxy_override(std::env::var(PROXY_BASE_ENV).ok());
    }

    fn apply_proxy_override(&mut self, value: Option<String>) {
        if let Some(base) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            tracing::debug!("proxy base overridden by {}: {}", PROXY_BASE_ENV, base);
            self.proxy_base_url = base;
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mcview")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// The proxy environment override is applied on top.
pub fn load_or_init() -> Result<McviewConfig> {
    let path = config_path()?;
    let mut cfg = load_from(&path)?;
    cfg.apply_env_override();
    Ok(cfg)
}

/// Load configuration from `path`, writing the defaults there if it does not exist.
pub fn load_from(path: &Path) -> Result<McviewConfig> {
    if !path.exists() {
        let default_cfg = McviewConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: McviewConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
