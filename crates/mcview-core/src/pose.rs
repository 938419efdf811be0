//! Skin render poses and the "reroll without repeating" selector.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on rejection-sampling draws in [`Pose::reroll`].
pub const MAX_REROLL_ATTEMPTS: usize = 256;

/// Named stance understood by the skin render service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pose {
    Default,
    Marching,
    Walking,
    Crouching,
    Crossed,
    CrissCross,
    Ultimate,
    Cheering,
    Relaxing,
    Trudging,
    Cowering,
    Pointing,
    Lunging,
    Dungeons,
    Facepalm,
    Sleeping,
    Dead,
    Archer,
    Kicking,
    Reading,
}

impl Pose {
    pub const ALL: [Pose; 20] = [
        Pose::Default,
        Pose::Marching,
        Pose::Walking,
        Pose::Crouching,
        Pose::Crossed,
        Pose::CrissCross,
        Pose::Ultimate,
        Pose::Cheering,
        Pose::Relaxing,
        Pose::Trudging,
        Pose::Cowering,
        Pose::Pointing,
        Pose::Lunging,
        Pose::Dungeons,
        Pose::Facepalm,
        Pose::Sleeping,
        Pose::Dead,
        Pose::Archer,
        Pose::Kicking,
        Pose::Reading,
    ];

    /// Path segment used by the render service.
    pub fn as_str(self) -> &'static str {
        match self {
            Pose::Default => "default",
            Pose::Marching => "marching",
            Pose::Walking => "walking",
            Pose::Crouching => "crouching",
            Pose::Crossed => "crossed",
            Pose::CrissCross => "criss_cross",
            Pose::Ultimate => "ultimate",
            Pose::Cheering => "cheering",
            Pose::Relaxing => "relaxing",
            Pose::Trudging => "trudging",
            Pose::Cowering => "cowering",
            Pose::Pointing => "pointing",
            Pose::Lunging => "lunging",
            Pose::Dungeons => "dungeons",
            Pose::Facepalm => "facepalm",
            Pose::Sleeping => "sleeping",
            Pose::Dead => "dead",
            Pose::Archer => "archer",
            Pose::Kicking => "kicking",
            Pose::Reading => "reading",
        }
    }

    /// Position in [`Pose::ALL`], which lists variants in declaration order.
    fn index(self) -> usize {
        self as usize
    }

    /// Uniformly random pose.
    pub fn random<R: Rng>(rng: &mut R) -> Pose {
        Pose::ALL[rng.random_range(0..Pose::ALL.len())]
    }

    /// Uniformly random pose different from `current`.
    ///
    /// Draws until the result differs from `current`. After
    /// [`MAX_REROLL_ATTEMPTS`] draws the pose following `current` in
    /// [`Pose::ALL`] is returned instead.
    pub fn reroll<R: Rng>(current: Pose, rng: &mut R) -> Pose {
        for _ in 0..MAX_REROLL_ATTEMPTS {
            let next = Pose::random(rng);
            if next != current {
                return next;
            }
        }
        tracing::warn!(
            "pose reroll hit {} draws without a new pose; using next slot",
            MAX_REROLL_ATTEMPTS
        );
        Pose::ALL[(current.index() + 1) % Pose::ALL.len()]
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pose '{0}'")]
pub struct UnknownPose(pub String);

impl FromStr for Pose {
    type Err = UnknownPose;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Pose::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPose(s.to_string()))
    }
}

/// Current pose of a displayed profile plus the rng used to change it.
#[derive(Debug)]
pub struct PoseSelector<R = StdRng> {
    rng: R,
    current: Pose,
}

impl PoseSelector<StdRng> {
    /// Selector backed by an OS-seeded `StdRng`.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// OS-seeded selector positioned at `pose`.
    pub fn starting_at(pose: Pose) -> Self {
        Self::with_pose(StdRng::from_os_rng(), pose)
    }
}

impl<R: Rng> PoseSelector<R> {
    /// Starts at a uniformly random pose.
    pub fn new(mut rng: R) -> Self {
        let current = Pose::random(&mut rng);
        Self { rng, current }
    }

    pub fn with_pose(rng: R, current: Pose) -> Self {
        Self { rng, current }
    }

    pub fn current(&self) -> Pose {
        self.current
    }

    /// Draws a fresh uniformly random pose, which may equal the current one.
    /// Used when a new profile is shown.
    pub fn reset(&mut self) -> Pose {
        self.current = Pose::random(&mut self.rng);
        self.current
    }

    /// Moves to a different pose and returns it.
    pub fn reroll(&mut self) -> Pose {
        self.current = Pose::reroll(self.current, &mut self.rng);
        self.current
    }
}
