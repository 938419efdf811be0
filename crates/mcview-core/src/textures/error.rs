//! Errors from decoding a textures property value.

/// Why a textures value could not be turned into a descriptor.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The value is not valid standard Base64.
    #[error("invalid base64 in textures property: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded bytes are not a valid texture descriptor document.
    #[error("invalid texture JSON: {0}")]
    Json(#[from] serde_json::Error),
}
