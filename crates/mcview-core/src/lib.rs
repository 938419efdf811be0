pub mod config;
pub mod logging;

pub mod endpoints;
pub mod lookup;
pub mod pose;
pub mod profile;
pub mod search;
pub mod textures;
pub mod view;

pub use endpoints::Endpoints;
pub use lookup::{CurlFetcher, LookupError, ProfileFetcher};
pub use pose::{Pose, PoseSelector};
pub use profile::{ProfileProperty, ProfileRecord};
pub use search::{SearchSession, SearchState, SubmitError, ValidationError};
pub use textures::TextureDescriptor;
pub use view::{LayoutMode, ProfileView};
