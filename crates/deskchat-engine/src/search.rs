//! Message search projection.

use serde::{Deserialize, Serialize};

/// One hit of a full-text message search.
///
/// The wire names mix conventions (`authorProfileImage` next to
/// `author_name`); they are preserved exactly as the engine emits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSearchResult {
    /// Identifier of the matching message.
    pub id: u32,
    /// Path to the author's profile image; empty when none is set.
    #[serde(rename = "authorProfileImage")]
    pub author_profile_image: String,
    /// Display name of the author.
    pub author_name: String,
    /// Identity color of the author.
    pub author_color: String,
    /// Name of the containing chat; absent when searching within a chat.
    pub chat_name: Option<String>,
    /// Matching message text.
    pub message: String,
    /// Sending timestamp, seconds since the epoch.
    pub timestamp: i64,
}
