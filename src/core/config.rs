//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos site options (address, site root) are read separately by
//! `leptos::prelude::get_configuration`.

use super::waitlist::{DEFAULT_SIMULATED_DELAY_MS, DEFAULT_SUBMIT_TIMEOUT_MS, WaitlistSettings};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Compress responses (`LANDING_COMPRESSION`, default on)
    pub compression: bool,

    /// Waitlist tuning (`WAITLIST_DELAY_MS`, `WAITLIST_TIMEOUT_MS`)
    pub waitlist: WaitlistSettings,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unparseable values fall back to their defaults with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let compression = lookup("LANDING_COMPRESSION")
            .map(|raw| parse_flag("LANDING_COMPRESSION", &raw, true))
            .unwrap_or(true);

        let simulated_delay_ms = lookup("WAITLIST_DELAY_MS")
            .map(|raw| parse_millis("WAITLIST_DELAY_MS", &raw, DEFAULT_SIMULATED_DELAY_MS))
            .unwrap_or(DEFAULT_SIMULATED_DELAY_MS);

        let submit_timeout_ms = match lookup("WAITLIST_TIMEOUT_MS") {
            Some(raw) => parse_timeout("WAITLIST_TIMEOUT_MS", &raw),
            None => Some(DEFAULT_SUBMIT_TIMEOUT_MS),
        };

        Self {
            compression,
            waitlist: WaitlistSettings {
                simulated_delay_ms,
                submit_timeout_ms,
            },
        }
    }

    /// Check if a submit timeout is configured
    pub fn has_submit_timeout(&self) -> bool {
        self.waitlist.submit_timeout_ms.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            waitlist: WaitlistSettings::default(),
        }
    }
}

fn parse_flag(key: &str, raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => true,
        "0" | "false" | "off" | "no" => false,
        _ => {
            tracing::warn!("Ignoring {}={:?}, expected true/false", key, raw);
            default
        }
    }
}

fn parse_millis(key: &str, raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(ms) => ms,
        Err(e) => {
            tracing::warn!("Ignoring {}={:?}: {}", key, raw, e);
            default
        }
    }
}

/// `0` or `off` disables the timeout
fn parse_timeout(key: &str, raw: &str) -> Option<u32> {
    if raw.trim().eq_ignore_ascii_case("off") {
        return None;
    }
    match parse_millis(key, raw, DEFAULT_SUBMIT_TIMEOUT_MS) {
        0 => None,
        ms => Some(ms),
    }
}
