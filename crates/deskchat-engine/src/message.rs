//! Message projections.
//!
//! The chat view renders one ordered sequence of heterogeneous entries:
//! regular messages interleaved with day separators and the unread marker.
//! [`MetaMessage`] is the closed union over those entry kinds; its numeric
//! `type` discriminant is part of the engine's wire contract.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::contact::Contact;

/// Delivery state of a message, using the engine's numeric constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageState {
    /// Incoming, freshly received and not yet noticed.
    InFresh,
    /// Incoming, noticed but not read.
    InNoticed,
    /// Outgoing, still being prepared.
    OutPreparing,
    /// Outgoing draft.
    OutDraft,
    /// Outgoing, queued for delivery.
    OutPending,
    /// Outgoing, delivery failed.
    OutFailed,
    /// Outgoing, delivered to the server.
    OutDelivered,
    /// Outgoing, read receipt received.
    OutMdnRcvd,
}

impl MessageState {
    /// The engine's numeric constant for this state.
    #[must_use]
    pub const fn to_number(self) -> u32 {
        match self {
            Self::InFresh => 10,
            Self::InNoticed => 13,
            Self::OutPreparing => 18,
            Self::OutDraft => 19,
            Self::OutPending => 20,
            Self::OutFailed => 24,
            Self::OutDelivered => 26,
            Self::OutMdnRcvd => 28,
        }
    }

    /// Parse an engine state constant.
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            10 => Some(Self::InFresh),
            13 => Some(Self::InNoticed),
            18 => Some(Self::OutPreparing),
            19 => Some(Self::OutDraft),
            20 => Some(Self::OutPending),
            24 => Some(Self::OutFailed),
            26 => Some(Self::OutDelivered),
            28 => Some(Self::OutMdnRcvd),
            _ => None,
        }
    }

    /// The display status string for this state.
    ///
    /// Incoming states map to the empty string; the UI shows no status
    /// indicator for them.
    #[must_use]
    pub const fn status(self) -> &'static str {
        match self {
            Self::InFresh | Self::InNoticed => "",
            Self::OutPreparing | Self::OutPending => "sending",
            Self::OutDraft => "draft",
            Self::OutFailed => "error",
            Self::OutDelivered => "delivered",
            Self::OutMdnRcvd => "read",
        }
    }
}

impl Serialize for MessageState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.to_number())
    }
}

impl<'de> Deserialize<'de> for MessageState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = u32::deserialize(deserializer)?;
        Self::from_number(number)
            .ok_or_else(|| D::Error::custom(format!("unknown message state: {number}")))
    }
}

/// The message a message replies to, reduced to what the UI renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageQuote {
    /// Identifier of the quoted message.
    pub message_id: u32,
    /// Quoted text.
    pub text: String,
    /// Display name of the quoted sender.
    pub display_name: String,
    /// Identity color of the quoted sender.
    pub display_color: String,
    /// Sender name override, if the quoted message carried one.
    pub override_sender_name: String,
}

/// A regular message as emitted by the engine.
///
/// The `file_*` fields keep their historical snake_case wire names; the
/// rest of the record is camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Message identifier.
    pub id: u32,
    /// Chat this message belongs to.
    pub chat_id: u32,
    /// Contact identifier of the sender.
    pub from_id: u32,
    /// Message text.
    pub text: String,
    /// Delivery state.
    pub state: MessageState,
    /// Sending timestamp, seconds since the epoch.
    pub timestamp: i64,
    /// Timestamp used for ordering in the chat view.
    pub sort_timestamp: i64,
    /// Reception timestamp.
    pub received_timestamp: i64,
    /// Whether the sending timestamp deviates from the received one enough
    /// to be displayed.
    pub has_deviating_timestamp: bool,
    /// Whether a POI location is bound to this message.
    pub has_location: bool,
    /// Engine view type constant (text, image, sticker, ...).
    pub view_type: u32,
    /// Whether the message is end-to-end encrypted.
    pub show_padlock: bool,
    /// Whether this is an informational system message.
    pub is_info: bool,
    /// Whether the message was forwarded.
    pub is_forwarded: bool,
    /// Media duration in milliseconds, 0 when not applicable.
    pub duration: i32,
    /// Media height in pixels, 0 when not applicable.
    pub dimensions_height: i32,
    /// Media width in pixels, 0 when not applicable.
    pub dimensions_width: i32,
    /// Sender name override for mailing lists.
    pub override_sender_name: Option<String>,
    /// Path to the attached file, if any.
    pub file: Option<String>,
    /// The sender's contact record.
    pub sender: Contact,
    /// First characters of the autocrypt setup code, for setup messages.
    pub setup_code_begin: Option<String>,
    /// MIME type of the attached file.
    #[serde(rename = "file_mime")]
    pub file_mime: Option<String>,
    /// Size of the attached file in bytes.
    #[serde(rename = "file_bytes")]
    pub file_bytes: Option<u64>,
    /// Name of the attached file.
    #[serde(rename = "file_name")]
    pub file_name: Option<String>,
    /// Quoted message, if this is a reply.
    pub quote: Option<MessageQuote>,
}

/// Numeric discriminants of the [`MetaMessage`] union.
mod meta_tag {
    pub const MARKER_ONE: u64 = 0;
    pub const DAY_MARKER: u64 = 1;
    pub const NORMAL: u64 = 2;
}

/// One entry of the rendered message sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaMessage {
    /// Marker above the first unread message, with the unread count.
    MarkerOne {
        /// Number of unread messages below the marker.
        count: u32,
    },
    /// Separator between messages of different days.
    DayMarker {
        /// Day being separated, seconds since the epoch.
        timestamp: i64,
    },
    /// A regular message.
    Normal(Box<Message>),
}

impl Serialize for MetaMessage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error as _;
        use serde::ser::SerializeMap;

        match self {
            Self::MarkerOne { count } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", &meta_tag::MARKER_ONE)?;
                map.serialize_entry("count", count)?;
                map.end()
            }
            Self::DayMarker { timestamp } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", &meta_tag::DAY_MARKER)?;
                map.serialize_entry("timestamp", timestamp)?;
                map.end()
            }
            Self::Normal(message) => {
                // discriminant flattened next to the message fields
                let mut value = serde_json::to_value(message).map_err(S::Error::custom)?;
                let object = value
                    .as_object_mut()
                    .ok_or_else(|| S::Error::custom("message did not serialize to an object"))?;
                object.insert("type".to_string(), meta_tag::NORMAL.into());
                value.serialize(serializer)
            }
        }
    }
}

impl<'de> Deserialize<'de> for MetaMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut value = serde_json::Value::deserialize(deserializer)?;
        let tag = value
            .get("type")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| D::Error::missing_field("type"))?;
        match tag {
            meta_tag::MARKER_ONE => {
                let count = value
                    .get("count")
                    .and_then(serde_json::Value::as_u64)
                    .ok_or_else(|| D::Error::missing_field("count"))?;
                let count = u32::try_from(count).map_err(D::Error::custom)?;
                Ok(Self::MarkerOne { count })
            }
            meta_tag::DAY_MARKER => {
                let timestamp = value
                    .get("timestamp")
                    .and_then(serde_json::Value::as_i64)
                    .ok_or_else(|| D::Error::missing_field("timestamp"))?;
                Ok(Self::DayMarker { timestamp })
            }
            meta_tag::NORMAL => {
                if let Some(object) = value.as_object_mut() {
                    object.remove("type");
                }
                serde_json::from_value(value)
                    .map(Box::new)
                    .map(Self::Normal)
                    .map_err(D::Error::custom)
            }
            other => Err(D::Error::custom(format!(
                "unknown meta message type: {other}"
            ))),
        }
    }
}
