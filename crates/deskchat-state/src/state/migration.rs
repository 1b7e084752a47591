//! One-time migration of the legacy single-credentials configuration.

use tracing::{debug, info};

use crate::account::{Account, AccountId};
use crate::color::identity_color;
use crate::settings::Credentials;
use crate::state::AppState;

/// Derive a registry entry from the deprecated credentials shape.
///
/// With an address present the result is a configured account: the display
/// name comes from the login user when set, the identity color is derived
/// from the address. Without an address only an unconfigured placeholder
/// can be synthesized.
#[must_use]
pub fn legacy_to_account(credentials: &Credentials, id: AccountId) -> Account {
    match credentials.addr.as_deref().filter(|a| !a.is_empty()) {
        Some(addr) => Account::Configured {
            id,
            display_name: credentials
                .mail_user
                .clone()
                .filter(|user| !user.is_empty()),
            addr: Some(addr.to_string()),
            profile_image: None,
            color: identity_color(addr),
        },
        None => Account::Unconfigured { id },
    }
}

/// Run the legacy migration on a freshly loaded state.
///
/// Gated on the presence of the deprecated field: once the new shape exists
/// (`lastAccount` set), the credentials are merely dropped so they cannot
/// be written back. Returns whether an account was synthesized.
pub(crate) fn migrate_legacy_credentials(state: &mut AppState) -> bool {
    let Some(credentials) = state.saved.credentials.take() else {
        return false;
    };
    if state.saved.last_account.is_some() {
        debug!("discarding legacy credentials; registry already migrated");
        return false;
    }

    let id = state.logins.next_id();
    let account = legacy_to_account(&credentials, id);
    info!(
        account = %id,
        configured = account.is_configured(),
        "migrated legacy credentials into the account registry"
    );
    state.logins.upsert(account);
    state.saved.last_account = Some(id);
    true
}
