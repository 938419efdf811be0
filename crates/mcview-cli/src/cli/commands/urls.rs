//! `mcview urls <uuid>` – print asset URLs for a UUID.

use anyhow::{Context, Result};
use mcview_core::config::McviewConfig;
use mcview_core::profile::undashed_uuid;
use mcview_core::{Endpoints, Pose, PoseSelector};

pub fn run_urls(cfg: &McviewConfig, uuid: &str, pose: Option<Pose>) -> Result<()> {
    let id = undashed_uuid(uuid)
        .with_context(|| format!("'{}' is not a UUID (32 hex digits, dashes optional)", uuid))?;
    let endpoints = Endpoints::from_config(cfg).context("invalid service URL in config")?;
    let pose = pose.unwrap_or_else(|| PoseSelector::from_entropy().current());

    println!("{:<8} {}", "avatar", endpoints.avatar_url(&id));
    println!("{:<8} {}", "render", endpoints.skin_render_url(pose, &id));
    println!("{:<8} {}", "cape", endpoints.cape_url(&id));
    println!("{:<8} {}", "namemc", endpoints.namelookup_url(&id));
    Ok(())
}
