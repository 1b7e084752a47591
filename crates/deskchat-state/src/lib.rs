//! # deskchat-state
//!
//! Persisted state layer for the `DeskChat` desktop client.
//!
//! This crate provides:
//! - Desktop settings (window bounds, UI toggles, locale, theme, per-account
//!   last-read-chat pointers)
//! - The account registry (known logins, configured or pending)
//! - The persisted `AppState` aggregate with atomic load/save
//! - One-time migration of the legacy single-credentials configuration
//! - Startup configuration (`RcConfig`) and theme addressing
//!
//! The messaging engine itself (transport, encryption, sync) is an external
//! collaborator; this crate never talks to it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod account;
pub mod color;
mod error;
pub mod rc;
pub mod settings;
pub mod state;
pub mod theme;

pub use account::{Account, AccountId, AccountRegistry};
pub use color::identity_color;
pub use error::{Error, Result};
pub use rc::RcConfig;
pub use settings::{Credentials, DesktopSettings, MailSecurity, SendSecurity, WindowBounds};
pub use state::{AppState, SettingsRegistry, StateStore, legacy_to_account};
pub use theme::{DEFAULT_THEME_ADDRESS, Theme, ThemeAddress, ThemeAddressError, ThemeNamespace};
