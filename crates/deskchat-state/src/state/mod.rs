//! Application state module.
//!
//! The persisted `AppState` aggregate, its file-backed store, the one-time
//! legacy credentials migration, and the single-writer registry facade.

mod migration;
mod model;
mod registry;
mod store;

pub use migration::legacy_to_account;
pub use model::AppState;
pub use registry::SettingsRegistry;
pub use store::StateStore;
