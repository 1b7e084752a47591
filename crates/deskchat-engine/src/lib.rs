//! # deskchat-engine
//!
//! Read-only projections of the records the external messaging engine
//! produces for the `DeskChat` desktop client: chat lists, full chats,
//! messages, contacts, locations, search results and QR scan results.
//!
//! These are immutable value shapes consumed by the UI. They carry no
//! lifecycle of their own; all mutation goes through the engine's API.
//! Wire field names mirror the engine's JSON output verbatim, including its
//! mix of camelCase and snake_case.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod chat;
pub mod contact;
pub mod location;
pub mod message;
pub mod qr;
pub mod search;

pub use chat::{ChatListItem, ChatSummary, FullChat};
pub use contact::Contact;
pub use location::Location;
pub use message::{Message, MessageQuote, MessageState, MetaMessage};
pub use qr::{QrCodeResponse, QrState};
pub use search::MessageSearchResult;
