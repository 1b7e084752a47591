//! Deprecated single-account credentials, kept for one-time migration.
//!
//! Old installations persisted one set of mail-transport parameters instead
//! of an account registry. This shape is read-only: it is accepted on load,
//! converted into a registry entry, and never written again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Transport security of the incoming (IMAP-like) server.
///
/// The empty spelling is legal in old documents and means "not chosen".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MailSecurity {
    /// Pick whatever the provider database suggests.
    #[default]
    #[serde(rename = "automatic")]
    Automatic,
    /// Not chosen yet.
    #[serde(rename = "")]
    Unset,
    /// Implicit TLS.
    #[serde(rename = "ssl")]
    Ssl,
    /// Server default.
    #[serde(rename = "default")]
    ServerDefault,
}

/// Transport security of the outgoing (SMTP-like) server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SendSecurity {
    /// Pick whatever the provider database suggests.
    #[default]
    #[serde(rename = "automatic")]
    Automatic,
    /// Not chosen yet.
    #[serde(rename = "")]
    Unset,
    /// Implicit TLS.
    #[serde(rename = "ssl")]
    Ssl,
    /// STARTTLS upgrade after plaintext connect.
    #[serde(rename = "starttls")]
    Starttls,
    /// No encryption.
    #[serde(rename = "plain")]
    Plain,
}

/// The deprecated single set of mail-transport credentials.
///
/// Every known field is typed; anything else an old installation may have
/// written ends up in `extra` instead of failing the parse. All transport
/// parameters are strings, ports included, exactly as the old client stored
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    /// E-mail address of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,
    /// Incoming server login user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_user: Option<String>,
    /// Incoming server password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_pw: Option<String>,
    /// Incoming server host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_server: Option<String>,
    /// Incoming server port, as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_port: Option<String>,
    /// Incoming transport security.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_security: Option<MailSecurity>,
    /// Incoming certificate-check strictness (engine-defined value).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imap_certificate_checks: Option<serde_json::Value>,
    /// Outgoing server login user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_user: Option<String>,
    /// Outgoing server password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_pw: Option<String>,
    /// Outgoing server host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_server: Option<String>,
    /// Outgoing server port, as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_port: Option<String>,
    /// Outgoing transport security.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_security: Option<SendSecurity>,
    /// Outgoing certificate-check strictness (engine-defined value).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smtp_certificate_checks: Option<serde_json::Value>,
    /// SOCKS5 proxy enabled flag ("0"/"1").
    #[serde(default)]
    pub socks5_enabled: String,
    /// SOCKS5 proxy host.
    #[serde(default)]
    pub socks5_host: String,
    /// SOCKS5 proxy port, as a string.
    #[serde(default)]
    pub socks5_port: String,
    /// SOCKS5 proxy user.
    #[serde(default)]
    pub socks5_user: String,
    /// SOCKS5 proxy password.
    #[serde(default)]
    pub socks5_password: String,
    /// Unrecognized legacy keys, preserved as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_legacy_document() {
        let credentials: Credentials = serde_json::from_value(serde_json::json!({
            "addr": "a@b.c",
            "mail_pw": "x",
            "socks5_enabled": "0",
            "socks5_host": "",
            "socks5_port": "",
            "socks5_user": "",
            "socks5_password": "",
        }))
        .unwrap();
        assert_eq!(credentials.addr.as_deref(), Some("a@b.c"));
        assert_eq!(credentials.mail_pw.as_deref(), Some("x"));
        assert_eq!(credentials.socks5_enabled, "0");
        assert!(credentials.mail_security.is_none());
    }

    #[test]
    fn unknown_fields_land_in_extra() {
        let credentials: Credentials = serde_json::from_value(serde_json::json!({
            "addr": "a@b.c",
            "some_forgotten_flag": true,
            "imap_folder": "INBOX",
        }))
        .unwrap();
        assert_eq!(credentials.extra.len(), 2);
        assert_eq!(
            credentials.extra.get("imap_folder"),
            Some(&serde_json::json!("INBOX"))
        );
    }

    #[test]
    fn empty_security_spelling_is_accepted() {
        let credentials: Credentials = serde_json::from_value(serde_json::json!({
            "mail_security": "",
            "send_security": "starttls",
        }))
        .unwrap();
        assert_eq!(credentials.mail_security, Some(MailSecurity::Unset));
        assert_eq!(credentials.send_security, Some(SendSecurity::Starttls));
    }

    #[test]
    fn numeric_certificate_checks_are_tolerated() {
        let credentials: Credentials = serde_json::from_value(serde_json::json!({
            "imap_certificate_checks": 1,
            "smtp_certificate_checks": "0",
        }))
        .unwrap();
        assert_eq!(
            credentials.imap_certificate_checks,
            Some(serde_json::json!(1))
        );
    }
}
