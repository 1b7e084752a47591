//! Desktop settings model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::legacy::Credentials;
use crate::account::AccountId;
use crate::theme;

/// Main window placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowBounds {
    /// Window height in pixels.
    pub height: u32,
    /// Window width in pixels.
    pub width: u32,
    /// Horizontal position of the top-left corner.
    pub x: u32,
    /// Vertical position of the top-left corner.
    pub y: u32,
}

/// The persisted desktop-level configuration.
///
/// Field names on disk are the exact legacy spellings (camelCase, with
/// oddities like `enableAVCalls`); they must round-trip byte-compatibly
/// with documents written by earlier releases. Every non-optional field
/// has a default so a partially written document still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopSettings {
    /// Window placement, or unset for default placement. Persisted as `{}`
    /// when unset, matching the old rectangle-or-empty-object union.
    #[serde(with = "bounds_serde", default)]
    pub bounds: Option<WindowBounds>,
    /// Background image for the chat view.
    #[serde(rename = "chatViewBgImg", default, skip_serializing_if = "Option::is_none")]
    pub chat_view_bg_img: Option<String>,
    /// Deprecated single-account credentials; read for migration only and
    /// never written back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Credentials>,
    /// The most recently active account. Replaces `credentials`.
    #[serde(rename = "lastAccount", default, skip_serializing_if = "Option::is_none")]
    pub last_account: Option<AccountId>,
    /// Enable audio/video call support.
    #[serde(rename = "enableAVCalls", default)]
    pub enable_av_calls: bool,
    /// Keep an audit log per chat.
    #[serde(rename = "enableChatAuditLog", default)]
    pub enable_chat_audit_log: bool,
    /// Allow on-demand location streaming.
    #[serde(rename = "enableOnDemandLocationStreaming", default)]
    pub enable_on_demand_location_streaming: bool,
    /// Send a message on Enter instead of inserting a newline.
    #[serde(rename = "enterKeySends", default)]
    pub enter_key_sends: bool,
    /// UI locale, or `null` for the system locale.
    #[serde(default)]
    pub locale: Option<String>,
    /// Show desktop notifications.
    #[serde(default = "default_true")]
    pub notifications: bool,
    /// Include message content in notifications.
    #[serde(rename = "showNotificationContent", default = "default_true")]
    pub show_notification_content: bool,
    /// Last viewed chat per account.
    #[serde(rename = "lastChats", default)]
    pub last_chats: BTreeMap<AccountId, u32>,
    /// UI scale factor, strictly positive.
    #[serde(rename = "zoomFactor", default = "default_zoom_factor")]
    pub zoom_factor: f64,
    /// Address of the active theme, `"<namespace>:<name>"`.
    #[serde(rename = "activeTheme", default = "default_active_theme")]
    pub active_theme: String,
    /// Minimize to the system tray instead of quitting.
    #[serde(rename = "minimizeToTray", default = "default_true")]
    pub minimize_to_tray: bool,
    /// Keep all accounts in sync, not only the active one.
    #[serde(rename = "syncAllAccounts", default = "default_true")]
    pub sync_all_accounts: bool,
}

const fn default_true() -> bool {
    true
}

const fn default_zoom_factor() -> f64 {
    1.0
}

fn default_active_theme() -> String {
    theme::DEFAULT_THEME_ADDRESS.to_string()
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self {
            bounds: None,
            chat_view_bg_img: None,
            credentials: None,
            last_account: None,
            enable_av_calls: false,
            enable_chat_audit_log: false,
            enable_on_demand_location_streaming: false,
            enter_key_sends: false,
            locale: None,
            notifications: true,
            show_notification_content: true,
            last_chats: BTreeMap::new(),
            zoom_factor: 1.0,
            active_theme: default_active_theme(),
            minimize_to_tray: true,
            sync_all_accounts: true,
        }
    }
}

/// Serde helpers for the bounds field.
///
/// Old documents store either a full rectangle or an empty object; new
/// documents keep that shape.
mod bounds_serde {
    use serde::de::Error as _;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::WindowBounds;

    #[allow(clippy::ref_option)] // Required by serde with= signature
    pub fn serialize<S>(bounds: &Option<WindowBounds>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match bounds {
            Some(rect) => rect.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<WindowBounds>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Object(map) if map.is_empty() => Ok(None),
            serde_json::Value::Object(_) => serde_json::from_value(value)
                .map(Some)
                .map_err(D::Error::custom),
            _ => Err(D::Error::custom("bounds must be an object")),
        }
    }
}
