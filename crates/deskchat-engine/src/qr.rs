//! QR scan projection.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Result kind of a QR code scan, using the engine's numeric constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrState {
    /// Ask the user whether to verify the contact.
    AskVerifyContact,
    /// Ask the user whether to join the group.
    AskVerifyGroup,
    /// Contact fingerprint is verified.
    FprOk,
    /// Scanned fingerprint does not match the last seen one.
    FprMismatch,
    /// The code contains a fingerprint but no address.
    FprWithoutAddr,
    /// Offer to create an account on the given domain.
    Account,
    /// Offer to use the given video chat instance.
    WebrtcInstance,
    /// A plain contact address was scanned.
    Addr,
    /// Plain text.
    Text,
    /// A URL.
    Url,
    /// The code could not be processed.
    Error,
}

impl QrState {
    /// The engine's numeric constant for this state.
    #[must_use]
    pub const fn to_number(self) -> u32 {
        match self {
            Self::AskVerifyContact => 200,
            Self::AskVerifyGroup => 202,
            Self::FprOk => 210,
            Self::FprMismatch => 220,
            Self::FprWithoutAddr => 230,
            Self::Account => 250,
            Self::WebrtcInstance => 260,
            Self::Addr => 320,
            Self::Text => 330,
            Self::Url => 332,
            Self::Error => 400,
        }
    }

    /// Parse an engine QR state constant.
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            200 => Some(Self::AskVerifyContact),
            202 => Some(Self::AskVerifyGroup),
            210 => Some(Self::FprOk),
            220 => Some(Self::FprMismatch),
            230 => Some(Self::FprWithoutAddr),
            250 => Some(Self::Account),
            260 => Some(Self::WebrtcInstance),
            320 => Some(Self::Addr),
            330 => Some(Self::Text),
            332 => Some(Self::Url),
            400 => Some(Self::Error),
            _ => None,
        }
    }
}

impl Serialize for QrState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.to_number())
    }
}

impl<'de> Deserialize<'de> for QrState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = u32::deserialize(deserializer)?;
        Self::from_number(number)
            .ok_or_else(|| D::Error::custom(format!("unknown QR state: {number}")))
    }
}

/// What the engine made of a scanned QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrCodeResponse {
    /// Result kind.
    pub state: QrState,
    /// Contact or chat identifier the code refers to, 0 when not
    /// applicable.
    pub id: u32,
    /// Kind-dependent payload: address, group name, text or URL.
    pub text1: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn numeric_constants() {
        assert_eq!(QrState::AskVerifyContact.to_number(), 200);
        assert_eq!(QrState::Url.to_number(), 332);
        assert_eq!(QrState::from_number(400), Some(QrState::Error));
        assert_eq!(QrState::from_number(201), None);
    }

    #[test]
    fn response_round_trips() {
        let response = QrCodeResponse {
            state: QrState::AskVerifyContact,
            id: 12,
            text1: "alice@example.com".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["state"], serde_json::json!(200));
        let back: QrCodeResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn unknown_state_is_rejected() {
        assert!(serde_json::from_value::<QrState>(serde_json::json!(123)).is_err());
    }
}
