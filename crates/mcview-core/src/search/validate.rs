//! Username validation, checked before any request is issued.

/// Maximum username length in UTF-16 code units, as a browser form counts it.
pub const MAX_USERNAME_LEN: usize = 16;

/// First rule a username breaks, in priority order required → max-length → pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("⚠ Este campo es obligatorio")]
    Required,
    #[error("⚠ Máximo 16 caracteres permitidos")]
    TooLong { len: usize },
    #[error("⚠ Solo letras, números y guiones bajos (_) permitidos")]
    InvalidCharacters,
}

/// Checks `input` against `^[a-zA-Z0-9_]{1,16}$`. The input is not trimmed.
pub fn validate_username(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::Required);
    }
    let len = input.encode_utf16().count();
    if len > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong { len });
    }
    if !input.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::InvalidCharacters);
    }
    Ok(())
}
