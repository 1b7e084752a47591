//! Desktop settings module.
//!
//! The persisted desktop-level configuration, distinct from any single
//! account's own configuration, plus the deprecated legacy credentials
//! shape kept for one-time migration.

mod legacy;
mod model;

pub use legacy::{Credentials, MailSecurity, SendSecurity};
pub use model::{DesktopSettings, WindowBounds};
