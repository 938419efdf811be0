//! Texture descriptor decoding.
//!
//! A profile's `textures` property holds a Base64 JSON document with the
//! skin and cape URLs. [`decode`] is the lenient entry point used by the
//! profile view: a missing property or a broken payload yields `None` and the
//! view stays in its placeholder state. [`decode_value`] is the strict form.

mod error;

pub use error::DecodeError;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::profile::ProfileRecord;

/// Standard alphabet; padding optional, like a browser's `atob`.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Reference to one texture image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureRef {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TextureMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Arm width of a skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinModel {
    Classic,
    Slim,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Textures {
    #[serde(rename = "SKIN", default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<TextureRef>,
    #[serde(rename = "CAPE", default, skip_serializing_if = "Option::is_none")]
    pub cape: Option<TextureRef>,
}

/// Decoded contents of the `textures` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureDescriptor {
    /// When the textures were last changed, in epoch milliseconds. Absent
    /// or non-numeric values decode as `None`.
    #[serde(
        default,
        deserialize_with = "lenient_millis",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub profile_id: String,
    #[serde(default)]
    pub profile_name: String,
    #[serde(default)]
    pub textures: Textures,
}

impl TextureDescriptor {
    pub fn skin_url(&self) -> Option<&str> {
        self.textures.skin.as_ref().map(|t| t.url.as_str())
    }

    pub fn cape_url(&self) -> Option<&str> {
        self.textures.cape.as_ref().map(|t| t.url.as_str())
    }

    /// Skin model, or `None` when there is no skin. Anything other than
    /// `"slim"` is the classic model.
    pub fn skin_model(&self) -> Option<SkinModel> {
        let skin = self.textures.skin.as_ref()?;
        let slim = skin
            .metadata
            .as_ref()
            .and_then(|m| m.model.as_deref())
            .is_some_and(|m| m.eq_ignore_ascii_case("slim"));
        Some(if slim { SkinModel::Slim } else { SkinModel::Classic })
    }

    /// `timestamp` as a UTC datetime; `None` if missing or out of range.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp.and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}

/// Accepts any JSON value for a millisecond timestamp. Integers are kept,
/// finite floats are truncated, anything else is `None`.
fn lenient_millis<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
    let value = serde_json::Value::deserialize(de)?;
    Ok(value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)))
}

/// Strictly decodes a Base64 textures value. ASCII whitespace is ignored.
pub fn decode_value(value: &str) -> Result<TextureDescriptor, DecodeError> {
    let compact: String = value.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = PAYLOAD_ENGINE.decode(compact.as_bytes())?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Decodes the first `textures` property of `profile`.
///
/// Returns `None` when the property is absent or cannot be decoded. Decode
/// failures are logged and never reach the caller.
pub fn decode(profile: &ProfileRecord) -> Option<TextureDescriptor> {
    let property = profile.textures_property()?;
    match decode_value(&property.value) {
        Ok(descriptor) => {
            tracing::debug!(
                profile = %profile.name,
                skin = descriptor.skin_url().is_some(),
                cape = descriptor.cape_url().is_some(),
                "decoded textures"
            );
            Some(descriptor)
        }
        Err(e) => {
            tracing::warn!(profile = %profile.name, "failed to decode textures: {}", e);
            None
        }
    }
}
