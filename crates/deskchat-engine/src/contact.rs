//! Contact projection.

use serde::{Deserialize, Serialize};

/// A contact record as emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Stable contact identifier.
    pub id: u32,
    /// Raw name as stored by the engine.
    pub name: String,
    /// Name to show in the UI.
    pub display_name: String,
    /// First name part of the display name.
    pub first_name: String,
    /// E-mail address.
    pub address: String,
    /// Combined "name (address)" label.
    pub name_and_addr: String,
    /// Identity color as a `#rrggbb` string.
    pub color: String,
    /// Path to the profile image, if one is set.
    pub profile_image: Option<String>,
    /// Whether the user blocked this contact.
    pub is_blocked: bool,
    /// Whether the contact's key is verified.
    pub is_verified: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_engine_output() {
        let contact: Contact = serde_json::from_value(serde_json::json!({
            "id": 12,
            "name": "Alice",
            "displayName": "Alice",
            "firstName": "Alice",
            "address": "alice@example.com",
            "nameAndAddr": "Alice (alice@example.com)",
            "color": "#2090ea",
            "profileImage": null,
            "isBlocked": false,
            "isVerified": true,
        }))
        .unwrap();
        assert_eq!(contact.id, 12);
        assert_eq!(contact.display_name, "Alice");
        assert!(contact.is_verified);
    }
}
