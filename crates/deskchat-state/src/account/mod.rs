//! Account management module.
//!
//! Provides the account model and the registry of known logins.

mod model;
mod registry;

pub use model::{Account, AccountId};
pub use registry::AccountRegistry;
