//! Profile card: everything shown for one search result.
//!
//! A single view parameterized by [`LayoutMode`]; the layouts differ only in
//! how the card is laid out as text.

mod render;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::endpoints::Endpoints;
use crate::pose::Pose;
use crate::profile::ProfileRecord;
use crate::textures::{self, SkinModel, TextureDescriptor};

/// Shown instead of the card details while no texture descriptor is available.
pub const PLACEHOLDER: &str = "Cargando datos de perfil...";

/// Text layout of the profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Fixed-width label column.
    Fixed,
    /// Label column and rules sized to the card's content.
    #[default]
    Responsive,
}

impl LayoutMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Fixed => "fixed",
            LayoutMode::Responsive => "responsive",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(LayoutMode::Fixed),
            "responsive" => Ok(LayoutMode::Responsive),
            other => Err(format!("unknown layout '{other}' (expected fixed or responsive)")),
        }
    }
}

/// 3D render of the skin in the current pose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkinSection {
    pub pose: Pose,
    pub render_url: String,
    /// Raw skin texture from the descriptor.
    pub texture_url: String,
    pub model: SkinModel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapeSection {
    pub image_url: String,
    /// Raw cape texture from the descriptor.
    pub texture_url: String,
}

/// Assembled profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
    pub namelookup_url: String,
    /// `None` keeps the card in its placeholder state.
    pub textures: Option<TextureDescriptor>,
    pub skin: Option<SkinSection>,
    pub cape: Option<CapeSection>,
}

impl ProfileView {
    /// Decodes the record's textures and composes all asset URLs.
    pub fn build(record: &ProfileRecord, endpoints: &Endpoints, pose: Pose) -> Self {
        let textures = textures::decode(record);

        let skin = textures.as_ref().and_then(|t| {
            let texture_url = t.skin_url()?.to_string();
            Some(SkinSection {
                pose,
                render_url: endpoints.skin_render_url(pose, &record.id),
                texture_url,
                model: t.skin_model().unwrap_or(SkinModel::Classic),
            })
        });

        let cape = textures.as_ref().and_then(|t| {
            Some(CapeSection {
                image_url: endpoints.cape_url(&record.id),
                texture_url: t.cape_url()?.to_string(),
            })
        });

        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            avatar_url: endpoints.avatar_url(&record.id),
            namelookup_url: endpoints.namelookup_url(&record.id),
            textures,
            skin,
            cape,
        }
    }

    /// True while there is no texture descriptor to show.
    pub fn is_placeholder(&self) -> bool {
        self.textures.is_none()
    }

    /// Current pose, if the card has a skin section.
    pub fn pose(&self) -> Option<Pose> {
        self.skin.as_ref().map(|s| s.pose)
    }

    /// Switches the skin render to `pose`. No-op without a skin.
    pub fn set_pose(&mut self, pose: Pose, endpoints: &Endpoints) {
        if let Some(skin) = self.skin.as_mut() {
            skin.pose = pose;
            skin.render_url = endpoints.skin_render_url(pose, &self.id);
        }
    }

    /// Renders the card as text.
    pub fn render(&self, layout: LayoutMode) -> String {
        render::render(self, layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileProperty;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    const UUID: &str = "069a79f444e94726a5befca90e38aaf5";

    fn record(textures_json: Option<&str>) -> ProfileRecord {
        ProfileRecord {
            id: UUID.into(),
            name: "Notch".into(),
            properties: textures_json
                .map(|json| ProfileProperty {
                    name: "textures".into(),
                    value: STANDARD.encode(json),
                    signature: None,
                })
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn skin_only_profile() {
        let r = record(Some(
            r#"{"timestamp":1700000000000,"textures":{"SKIN":{"url":"https://x/skin.png"}}}"#,
        ));
        let view = ProfileView::build(&r, &Endpoints::default(), Pose::Dead);
        assert!(!view.is_placeholder());
        let skin = view.skin.as_ref().unwrap();
        assert_eq!(skin.texture_url, "https://x/skin.png");
        assert_eq!(
            skin.render_url,
            format!("https://starlightskins.lunareclipse.studio/render/dead/{UUID}/full")
        );
        assert!(view.cape.is_none());
        assert_eq!(
            view.avatar_url,
            format!("https://crafatar.com/avatars/{UUID}?size=100&overlay")
        );
    }

    #[test]
    fn cape_only_profile() {
        let r = record(Some(
            r#"{"timestamp":1,"textures":{"CAPE":{"url":"https://x/cape.png"}}}"#,
        ));
        let view = ProfileView::build(&r, &Endpoints::default(), Pose::Default);
        assert!(view.skin.is_none());
        assert_eq!(view.pose(), None);
        let cape = view.cape.as_ref().unwrap();
        assert_eq!(cape.texture_url, "https://x/cape.png");
        assert_eq!(cape.image_url, format!("https://crafatar.com/capes/{UUID}"));
    }

    #[test]
    fn missing_textures_is_placeholder() {
        let view = ProfileView::build(&record(None), &Endpoints::default(), Pose::Default);
        assert!(view.is_placeholder());
        assert!(view.skin.is_none());
        assert!(view.cape.is_none());
        assert_eq!(view.render(LayoutMode::Fixed).trim(), PLACEHOLDER);
        assert_eq!(view.render(LayoutMode::Responsive).trim(), PLACEHOLDER);
    }

    #[test]
    fn set_pose_rebuilds_render_url_only() {
        let r = record(Some(
            r#"{"timestamp":1,"textures":{"SKIN":{"url":"https://x/skin.png"}}}"#,
        ));
        let endpoints = Endpoints::default();
        let mut view = ProfileView::build(&r, &endpoints, Pose::Default);
        let avatar = view.avatar_url.clone();
        view.set_pose(Pose::Archer, &endpoints);
        assert_eq!(view.pose(), Some(Pose::Archer));
        assert!(view.skin.as_ref().unwrap().render_url.contains("/render/archer/"));
        assert_eq!(view.avatar_url, avatar);
    }

    #[test]
    fn layout_parse_and_serde() {
        assert_eq!("Fixed".parse::<LayoutMode>().unwrap(), LayoutMode::Fixed);
        assert!("grid".parse::<LayoutMode>().is_err());
        assert_eq!(
            serde_json::to_string(&LayoutMode::Responsive).unwrap(),
            "\"responsive\""
        );
    }

    #[test]
    fn view_serializes_to_json() {
        let r = record(Some(
            r#"{"timestamp":1,"textures":{"SKIN":{"url":"https://x/s.png","metadata":{"model":"slim"}}}}"#,
        ));
        let view = ProfileView::build(&r, &Endpoints::default(), Pose::Reading);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["skin"]["pose"], "reading");
        assert_eq!(json["skin"]["model"], "slim");
        assert_eq!(json["textures"]["textures"]["SKIN"]["url"], "https://x/s.png");
        assert!(json["cape"].is_null());
    }
}
