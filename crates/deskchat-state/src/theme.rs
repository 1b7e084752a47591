//! Theme records and theme addressing.
//!
//! Themes are supplied by the theme loader collaborator; this crate only
//! addresses them. An address is `"<namespace>:<name>"` where the namespace
//! is either the built-in scheme (`dc`) or `custom`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Address of the theme used when nothing is configured.
pub const DEFAULT_THEME_ADDRESS: &str = "dc:light";

/// A theme record as produced by the theme loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Short description shown in the theme picker.
    pub description: String,
    /// Address of the theme file, `"<namespace>:<name>"`.
    pub address: String,
    /// Prototype themes are hidden from selection unless the client runs in
    /// devmode.
    pub is_prototype: bool,
}

/// Namespace part of a theme address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeNamespace {
    /// A theme shipped with the client (`dc`).
    BuiltIn,
    /// A user-provided theme (`custom`).
    Custom,
}

impl ThemeNamespace {
    /// The namespace prefix as it appears in addresses.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::BuiltIn => "dc",
            Self::Custom => "custom",
        }
    }
}

/// A parsed theme address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeAddress {
    /// Where the theme comes from.
    pub namespace: ThemeNamespace,
    /// Name of the theme within its namespace.
    pub name: String,
}

/// Failure to parse a theme address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeAddressError {
    /// The address has no `:` separator.
    MissingSeparator,
    /// The namespace is not one of the known schemes.
    UnknownNamespace(String),
    /// The name part is empty.
    EmptyName,
}

impl std::fmt::Display for ThemeAddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "theme address has no ':' separator"),
            Self::UnknownNamespace(ns) => write!(f, "unknown theme namespace: {ns}"),
            Self::EmptyName => write!(f, "theme address has an empty name"),
        }
    }
}

impl std::error::Error for ThemeAddressError {}

impl FromStr for ThemeAddress {
    type Err = ThemeAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, name) = s
            .split_once(':')
            .ok_or(ThemeAddressError::MissingSeparator)?;
        let namespace = match namespace {
            "dc" => ThemeNamespace::BuiltIn,
            "custom" => ThemeNamespace::Custom,
            other => return Err(ThemeAddressError::UnknownNamespace(other.to_string())),
        };
        if name.is_empty() {
            return Err(ThemeAddressError::EmptyName);
        }
        Ok(Self {
            namespace,
            name: name.to_string(),
        })
    }
}

impl std::fmt::Display for ThemeAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace.prefix(), self.name)
    }
}
