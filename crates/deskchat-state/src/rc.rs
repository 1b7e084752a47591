//! Startup configuration.
//!
//! `RcConfig` is supplied by the process host on the command line, read once
//! at startup and never persisted. The kebab-case wire names match what
//! previous releases accepted.

use serde::{Deserialize, Serialize};

/// Runtime configuration flags passed at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RcConfig {
    /// Log debug-level messages.
    #[serde(rename = "log-debug", default)]
    pub log_debug: bool,
    /// Also log to the console.
    #[serde(rename = "log-to-console", default)]
    pub log_to_console: bool,
    /// Emit stack traces in machine-readable form.
    #[serde(rename = "machine-readable-stacktrace", default)]
    pub machine_readable_stacktrace: bool,
    /// Allow running more than one instance.
    #[serde(rename = "multiple-instances", default)]
    pub multiple_instances: bool,
    /// Theme address override, e.g. `"dc:dark"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Reload the theme when its file changes.
    #[serde(rename = "theme-watch", default)]
    pub theme_watch: bool,
    /// Developer mode: shows prototype themes and implies verbose console
    /// logging.
    #[serde(default)]
    pub devmode: bool,
    /// Reload translations when their files change.
    #[serde(rename = "translation-watch", default)]
    pub translation_watch: bool,
    /// Start minimized to the tray.
    #[serde(default)]
    pub minimized: bool,
}

impl RcConfig {
    /// Parse startup flags from process arguments.
    ///
    /// Unknown arguments are ignored; the host owns the full argument
    /// vector and may carry flags this crate does not know about.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rc = Self::default();
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_ref() {
                "--log-debug" => rc.log_debug = true,
                "--log-to-console" => rc.log_to_console = true,
                "--machine-readable-stacktrace" => rc.machine_readable_stacktrace = true,
                "--multiple-instances" => rc.multiple_instances = true,
                "--theme" => rc.theme = iter.next().map(|s| s.as_ref().to_string()),
                "--theme-watch" => rc.theme_watch = true,
                "--devmode" => {
                    rc.devmode = true;
                    rc.log_debug = true;
                    rc.log_to_console = true;
                }
                "--translation-watch" => rc.translation_watch = true,
                "--minimized" => rc.minimized = true,
                _ => {}
            }
        }
        rc
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let rc = RcConfig::default();
        assert!(!rc.log_debug);
        assert!(!rc.devmode);
        assert!(rc.theme.is_none());
    }

    #[test]
    fn parses_flags() {
        let rc = RcConfig::from_args(["--minimized", "--theme", "dc:dark", "--theme-watch"]);
        assert!(rc.minimized);
        assert!(rc.theme_watch);
        assert_eq!(rc.theme.as_deref(), Some("dc:dark"));
    }

    #[test]
    fn devmode_implies_console_logging() {
        let rc = RcConfig::from_args(["--devmode"]);
        assert!(rc.devmode);
        assert!(rc.log_debug);
        assert!(rc.log_to_console);
    }

    #[test]
    fn unknown_arguments_are_ignored() {
        let rc = RcConfig::from_args(["--no-sandbox", "--log-debug"]);
        assert!(rc.log_debug);
        assert!(!rc.multiple_instances);
    }

    #[test]
    fn kebab_case_wire_names() {
        let rc = RcConfig {
            log_debug: true,
            machine_readable_stacktrace: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&rc).unwrap();
        assert_eq!(json["log-debug"], serde_json::json!(true));
        assert_eq!(json["machine-readable-stacktrace"], serde_json::json!(true));
        let back: RcConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, rc);
    }
}
