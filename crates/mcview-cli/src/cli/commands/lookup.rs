//! `mcview lookup <username>` – fetch a profile and print its card.

use anyhow::{Context, Result};
use mcview_core::config::McviewConfig;
use mcview_core::{
    CurlFetcher, Endpoints, LayoutMode, LookupError, Pose, ProfileFetcher, SearchSession,
    SearchState, SubmitError,
};

/// Runs one search on `session`, with the blocking request moved off the runtime.
/// The session is `Loading` while the request is in flight and always leaves
/// it: a worker that dies is stored as an error like any other failure.
pub(super) async fn search<F>(
    session: &mut SearchSession<F>,
    username: &str,
) -> Result<(), SubmitError>
where
    F: ProfileFetcher + Clone + Send + 'static,
{
    let pending = session.begin(username)?;
    let fetcher = session.fetcher().clone();
    let url = pending.url().to_string();
    let result = tokio::task::spawn_blocking(move || fetcher.fetch(&url))
        .await
        .unwrap_or_else(|e| Err(LookupError::Aborted(e.to_string())));
    session.complete(pending, result);
    Ok(())
}

pub(super) fn new_session(cfg: &McviewConfig) -> Result<SearchSession<CurlFetcher>> {
    let endpoints = Endpoints::from_config(cfg).context("invalid service URL in config")?;
    Ok(SearchSession::new(CurlFetcher::new(&cfg.http()), endpoints))
}

pub async fn run_lookup(
    cfg: &McviewConfig,
    username: &str,
    pose: Option<Pose>,
    layout: LayoutMode,
    json: bool,
) -> Result<()> {
    let mut session = new_session(cfg)?;
    search(&mut session, username).await?;

    match session.state() {
        SearchState::Loaded(view) => {
            let mut view = view.clone();
            if let Some(pose) = pose {
                view.set_pose(pose, session.endpoints());
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", view.render(layout));
            }
            Ok(())
        }
        SearchState::Errored(msg) => anyhow::bail!("{}", msg),
        other => anyhow::bail!("lookup did not complete (state {:?})", other),
    }
}
