//! Public profile record as returned by the lookup proxy.

use serde::{Deserialize, Serialize};

/// Name of the property carrying the Base64 texture payload.
pub const TEXTURES_PROPERTY: &str = "textures";

/// One signed property of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
    /// Mojang signature over `value`; kept verbatim, never verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// A player's public identity: undashed UUID, username and signed properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<ProfileProperty>,
}

impl ProfileRecord {
    /// First property named `textures`, if any.
    pub fn textures_property(&self) -> Option<&ProfileProperty> {
        self.properties.iter().find(|p| p.name == TEXTURES_PROPERTY)
    }
}

/// Normalizes a UUID to the 32-char lowercase undashed form used in asset URLs.
/// Returns `None` unless the input is 32 hex digits once dashes are removed.
pub fn undashed_uuid(input: &str) -> Option<String> {
    let hex: String = input.trim().chars().filter(|c| *c != '-').collect();
    if hex.len() == 32 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(hex.to_ascii_lowercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undashed_uuid_accepts_both_forms() {
        assert_eq!(
            undashed_uuid("069a79f4-44e9-4726-a5be-fca90e38aaf5").as_deref(),
            Some("069a79f444e94726a5befca90e38aaf5")
        );
        assert_eq!(
            undashed_uuid("069A79F444E94726A5BEFCA90E38AAF5").as_deref(),
            Some("069a79f444e94726a5befca90e38aaf5")
        );
        assert!(undashed_uuid("Notch").is_none());
        assert!(undashed_uuid("069a79f444e94726a5befca90e38aaf").is_none());
    }

    #[test]
    fn parses_proxy_response() {
        let json = r#"{
            "id": "069a79f444e94726a5befca90e38aaf5",
            "name": "Notch",
            "properties": [
                {"name": "textures", "value": "e30=", "signature": "abc"}
            ],
            "profileActions": []
        }"#;
        let record: ProfileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "069a79f444e94726a5befca90e38aaf5");
        assert_eq!(record.name, "Notch");
        assert_eq!(record.properties.len(), 1);
        assert_eq!(record.properties[0].signature.as_deref(), Some("abc"));
    }

    #[test]
    fn missing_properties_is_empty() {
        let record: ProfileRecord =
            serde_json::from_str(r#"{"id": "00000000000000000000000000000000", "name": "x"}"#)
                .unwrap();
        assert!(record.properties.is_empty());
        assert!(record.textures_property().is_none());
    }

    #[test]
    fn textures_property_takes_first_match() {
        let record = ProfileRecord {
            id: "a".into(),
            name: "b".into(),
            properties: vec![
                ProfileProperty {
                    name: "other".into(),
                    value: "0".into(),
                    signature: None,
                },
                ProfileProperty {
                    name: "textures".into(),
                    value: "first".into(),
                    signature: None,
                },
                ProfileProperty {
                    name: "textures".into(),
                    value: "second".into(),
                    signature: None,
                },
            ],
        };
        assert_eq!(record.textures_property().unwrap().value, "first");
    }
}
