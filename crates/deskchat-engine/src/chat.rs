//! Chat projections.

use serde::{Deserialize, Serialize};

use crate::contact::Contact;
use crate::message::MessageState;

/// Preview of the newest message, shown in the chat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    /// First summary line, usually the sender name.
    pub text1: Option<String>,
    /// Second summary line, usually the message text.
    pub text2: Option<String>,
    /// Delivery state of the previewed message.
    pub state: MessageState,
}

/// One entry of the chat list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatListItem {
    /// Chat identifier.
    pub id: u32,
    /// Chat name.
    pub name: String,
    /// Path to the avatar image; empty when the chat has none.
    pub avatar_path: String,
    /// Chat color as a `#rrggbb` string.
    pub color: String,
    /// Timestamp of the newest activity.
    pub last_updated: i64,
    /// Preview of the newest message, absent for empty chats.
    pub summary: Option<ChatSummary>,
    /// Whether the chat is a not-yet-accepted contact request.
    pub is_contact_request: bool,
    /// Whether the chat is protected (verified members only).
    pub is_protected: bool,
    /// Whether the chat is a group.
    pub is_group: bool,
    /// Number of fresh (unseen) messages.
    pub fresh_message_counter: u32,
    /// Whether this entry is the "archived chats" link.
    pub is_archive_link: bool,
    /// Identifiers of the chat members.
    pub contact_ids: Vec<u32>,
    /// Whether this is the saved-messages chat.
    pub is_self_talk: bool,
    /// Whether this is the device-messages chat.
    pub is_device_talk: bool,
    /// Whether the user is still a member of the group.
    pub self_in_group: bool,
    /// Whether the chat is archived.
    pub archived: bool,
    /// Whether the chat is pinned to the top of the list.
    pub pinned: bool,
    /// Whether notifications are muted for this chat.
    pub muted: bool,
}

/// Full view model of a single chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullChat {
    /// Chat identifier.
    pub id: u32,
    /// Chat name.
    pub name: String,
    /// Whether the chat is protected (verified members only).
    pub is_protected: bool,
    /// Path to the chat profile image; empty when the chat has none.
    pub profile_image: String,
    /// Whether the chat is archived.
    pub archived: bool,
    /// Engine chat type constant (single, group, ...).
    #[serde(rename = "type")]
    pub chat_type: u32,
    /// Whether the group has no messages yet.
    pub is_unpromoted: bool,
    /// Whether this is the saved-messages chat.
    pub is_self_talk: bool,
    /// Member contact records.
    pub contacts: Vec<Contact>,
    /// Identifiers of the chat members.
    pub contact_ids: Vec<u32>,
    /// Chat color as a `#rrggbb` string.
    pub color: String,
    /// Number of fresh (unseen) messages.
    pub fresh_message_counter: u32,
    /// Whether the chat is a group.
    pub is_group: bool,
    /// Whether the chat is a not-yet-accepted contact request.
    pub is_contact_request: bool,
    /// Whether this is the device-messages chat.
    pub is_device_chat: bool,
    /// Whether the user is still a member of the group.
    pub self_in_group: bool,
    /// Whether notifications are muted for this chat.
    pub muted: bool,
    /// Ephemeral message timer in seconds, 0 when disabled.
    pub ephemeral_timer: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn chat_list_item_deserializes_engine_output() {
        let item: ChatListItem = serde_json::from_value(serde_json::json!({
            "id": 1010,
            "name": "Team",
            "avatarPath": "",
            "color": "#ff8000",
            "lastUpdated": 1_600_000_000_i64,
            "summary": { "text1": "Alice", "text2": "hi all", "state": 26 },
            "isContactRequest": false,
            "isProtected": false,
            "isGroup": true,
            "freshMessageCounter": 2,
            "isArchiveLink": false,
            "contactIds": [12, 13],
            "isSelfTalk": false,
            "isDeviceTalk": false,
            "selfInGroup": true,
            "archived": false,
            "pinned": true,
            "muted": false,
        }))
        .unwrap();
        assert_eq!(item.id, 1010);
        assert!(item.is_group);
        let summary = item.summary.unwrap();
        assert_eq!(summary.state, MessageState::OutDelivered);
        assert_eq!(summary.text2.as_deref(), Some("hi all"));
    }

    #[test]
    fn full_chat_type_field_keeps_wire_name() {
        let chat = FullChat {
            id: 1,
            name: "Alice".to_string(),
            is_protected: false,
            profile_image: String::new(),
            archived: false,
            chat_type: 100,
            is_unpromoted: false,
            is_self_talk: false,
            contacts: vec![],
            contact_ids: vec![12],
            color: "#2090ea".to_string(),
            fresh_message_counter: 0,
            is_group: false,
            is_contact_request: false,
            is_device_chat: false,
            self_in_group: false,
            muted: false,
            ephemeral_timer: 0,
        };
        let json = serde_json::to_value(&chat).unwrap();
        assert_eq!(json["type"], serde_json::json!(100));
        assert!(json.as_object().unwrap().contains_key("ephemeralTimer"));
    }
}
