//! Search session: validate a username, look it up once, hold the result.
//!
//! State is owned by one `SearchSession` value. A submission clears the
//! previous profile and error before the request starts, and a new
//! submission is refused while one is in flight.

mod validate;

pub use validate::{validate_username, ValidationError, MAX_USERNAME_LEN};

use rand::rngs::StdRng;
use rand::Rng;

use crate::endpoints::Endpoints;
use crate::lookup::{LookupError, ProfileFetcher};
use crate::pose::{Pose, PoseSelector};
use crate::profile::ProfileRecord;
use crate::view::ProfileView;

/// Where the search flow currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading {
        username: String,
    },
    Loaded(ProfileView),
    Errored(String),
}

/// Why a submission was not started.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// A lookup is already in flight.
    #[error("a search is already in progress")]
    Busy,
}

/// An accepted submission waiting for its lookup result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    username: String,
    url: String,
}

impl PendingLookup {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug)]
pub struct SearchSession<F, R = StdRng> {
    fetcher: F,
    endpoints: Endpoints,
    poses: PoseSelector<R>,
    state: SearchState,
}

impl<F: ProfileFetcher> SearchSession<F, StdRng> {
    pub fn new(fetcher: F, endpoints: Endpoints) -> Self {
        Self::with_poses(fetcher, endpoints, PoseSelector::from_entropy())
    }
}

impl<F: ProfileFetcher, R: Rng> SearchSession<F, R> {
    pub fn with_poses(fetcher: F, endpoints: Endpoints, poses: PoseSelector<R>) -> Self {
        Self {
            fetcher,
            endpoints,
            poses,
            state: SearchState::Idle,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading { .. })
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading()
    }

    pub fn profile(&self) -> Option<&ProfileView> {
        match &self.state {
            SearchState::Loaded(view) => Some(view),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SearchState::Errored(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Validates `username` and enters the loading state.
    ///
    /// On a validation failure nothing changes. On success the previous
    /// profile or error is dropped and the returned lookup must be passed to
    /// [`complete`](Self::complete).
    pub fn begin(&mut self, username: &str) -> Result<PendingLookup, SubmitError> {
        if self.is_loading() {
            tracing::debug!("submit of '{}' ignored: search in progress", username);
            return Err(SubmitError::Busy);
        }
        validate_username(username)?;

        let url = self.endpoints.lookup_url(username);
        tracing::info!("looking up profile '{}'", username);
        self.state = SearchState::Loading {
            username: username.to_string(),
        };
        Ok(PendingLookup {
            username: username.to_string(),
            url,
        })
    }

    /// Stores the outcome of a lookup started by [`begin`](Self::begin).
    pub fn complete(
        &mut self,
        pending: PendingLookup,
        result: Result<ProfileRecord, LookupError>,
    ) -> &SearchState {
        match &self.state {
            SearchState::Loading { username } if *username == pending.username => {}
            other => {
                tracing::warn!(
                    "lookup result for '{}' arrived in state {:?}",
                    pending.username,
                    other
                );
            }
        }

        self.state = match result {
            Ok(record) => {
                let pose = self.poses.reset();
                tracing::info!(
                    "loaded profile {} ({}) with pose {}",
                    record.name,
                    record.id,
                    pose
                );
                SearchState::Loaded(ProfileView::build(&record, &self.endpoints, pose))
            }
            Err(e) => {
                tracing::warn!("lookup of '{}' failed: {:?}", pending.username, e);
                SearchState::Errored(e.to_string())
            }
        };
        &self.state
    }

    /// Validates, fetches with the session's fetcher and stores the result.
    pub fn submit(&mut self, username: &str) -> Result<&SearchState, SubmitError> {
        let pending = self.begin(username)?;
        let result = self.fetcher.fetch(pending.url());
        Ok(self.complete(pending, result))
    }

    /// Switches the loaded profile's skin render to a different pose.
    /// Returns `None` when no profile with a skin is shown.
    pub fn reroll_pose(&mut self) -> Option<Pose> {
        let SearchState::Loaded(view) = &mut self.state else {
            return None;
        };
        if view.skin.is_none() {
            return None;
        }
        let pose = self.poses.reroll();
        view.set_pose(pose, &self.endpoints);
        tracing::debug!("pose rerolled to {}", pose);
        Some(pose)
    }

    /// Drops any profile or error and returns to idle.
    pub fn clear(&mut self) {
        self.state = SearchState::Idle;
    }
}
