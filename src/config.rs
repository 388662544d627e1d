use std::env;
use std::path::Path;

use crate::validator::ContactRule;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MESSAGING_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_ORDER_RECIPIENT: &str = "6282133886418";
pub const DEFAULT_EDIT_MEDIA_RECIPIENT: &str = "6285640476286";
pub const DEFAULT_GRAPHIC_DESIGN_RECIPIENT: &str = "6285600554738";
pub const DEFAULT_CONTACT_PREFIXES: &str = "+62,62,0";
pub const DEFAULT_CONTACT_MIN_DIGITS: usize = 9;
pub const DEFAULT_CONTACT_MAX_DIGITS: usize = 13;
pub const DEFAULT_NOTIFICATION_TTL_MS: u64 = 4000;
/// Longest a notification may stay on screen (one hour).
pub const MAX_NOTIFICATION_TTL_MS: u64 = 3_600_000;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_host() -> String {
    env::var("HOST")
        .ok()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn get_messaging_base_url() -> String {
    sanitize_base_url(&env::var("MESSAGING_BASE_URL").unwrap_or_else(|_| DEFAULT_MESSAGING_BASE_URL.to_string()))
}

pub fn get_order_recipient() -> String {
    recipient_from_env("ORDER_RECIPIENT", DEFAULT_ORDER_RECIPIENT)
}

pub fn get_edit_media_recipient() -> String {
    recipient_from_env("EDIT_MEDIA_RECIPIENT", DEFAULT_EDIT_MEDIA_RECIPIENT)
}

pub fn get_graphic_design_recipient() -> String {
    recipient_from_env("GRAPHIC_DESIGN_RECIPIENT", DEFAULT_GRAPHIC_DESIGN_RECIPIENT)
}

pub fn get_contact_prefixes() -> Vec<String> {
    let raw = env::var("CONTACT_PREFIXES").unwrap_or_else(|_| DEFAULT_CONTACT_PREFIXES.to_string());
    let mut prefixes = Vec::new();
    for p in raw.split(',') {
        let t = p.trim();
        if !t.is_empty() {
            prefixes.push(t.to_string());
        }
    }
    prefixes
}

pub fn get_contact_min_digits() -> usize {
    parse_usize_env("CONTACT_MIN_DIGITS", DEFAULT_CONTACT_MIN_DIGITS)
}

pub fn get_contact_max_digits() -> usize {
    parse_usize_env("CONTACT_MAX_DIGITS", DEFAULT_CONTACT_MAX_DIGITS)
}

pub fn get_notification_ttl_ms() -> u64 {
    let Ok(raw) = env::var("NOTIFICATION_TTL_MS") else {
        return DEFAULT_NOTIFICATION_TTL_MS;
    };
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms <= MAX_NOTIFICATION_TTL_MS => ms,
        _ => {
            tracing::warn!(value = %raw, max = MAX_NOTIFICATION_TTL_MS, "Ignoring NOTIFICATION_TTL_MS, using default");
            DEFAULT_NOTIFICATION_TTL_MS
        }
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_MESSAGING_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Keep only the digits of a phone-style recipient (`+62 821-3388` -> `628213388`).
pub fn sanitize_recipient(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn recipient_from_env(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => sanitize_recipient(&v),
        _ => default.to_string(),
    }
}

fn parse_usize_env(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

/// Everything a deployment can tune, gathered once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub messaging_base_url: String,
    pub order_recipient: String,
    pub edit_media_recipient: String,
    pub graphic_design_recipient: String,
    pub contact_prefixes: Vec<String>,
    pub contact_min_digits: usize,
    pub contact_max_digits: usize,
    pub notification_ttl_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            messaging_base_url: DEFAULT_MESSAGING_BASE_URL.to_string(),
            order_recipient: DEFAULT_ORDER_RECIPIENT.to_string(),
            edit_media_recipient: DEFAULT_EDIT_MEDIA_RECIPIENT.to_string(),
            graphic_design_recipient: DEFAULT_GRAPHIC_DESIGN_RECIPIENT.to_string(),
            contact_prefixes: DEFAULT_CONTACT_PREFIXES.split(',').map(str::to_string).collect(),
            contact_min_digits: DEFAULT_CONTACT_MIN_DIGITS,
            contact_max_digits: DEFAULT_CONTACT_MAX_DIGITS,
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            messaging_base_url: get_messaging_base_url(),
            order_recipient: get_order_recipient(),
            edit_media_recipient: get_edit_media_recipient(),
            graphic_design_recipient: get_graphic_design_recipient(),
            contact_prefixes: get_contact_prefixes(),
            contact_min_digits: get_contact_min_digits(),
            contact_max_digits: get_contact_max_digits(),
            notification_ttl_ms: get_notification_ttl_ms(),
        }
    }

    pub fn contact_rule(&self) -> ContactRule {
        ContactRule {
            prefixes: self.contact_prefixes.clone(),
            min_digits: self.contact_min_digits,
            max_digits: self.contact_max_digits,
        }
    }

    /// Human-readable configuration problems; empty when the settings are usable.
    pub fn problems(&self) -> Vec<String> {
        let mut out = Vec::new();
        if !self.messaging_base_url.starts_with("https://") && !self.messaging_base_url.starts_with("http://") {
            out.push(format!("MESSAGING_BASE_URL must be an http(s) URL, got '{}'", self.messaging_base_url));
        }
        for (key, value) in [
            ("ORDER_RECIPIENT", &self.order_recipient),
            ("EDIT_MEDIA_RECIPIENT", &self.edit_media_recipient),
            ("GRAPHIC_DESIGN_RECIPIENT", &self.graphic_design_recipient),
        ] {
            if value.is_empty() {
                out.push(format!("{} has no digits", key));
            }
        }
        if self.notification_ttl_ms == 0 {
            out.push("NOTIFICATION_TTL_MS must be greater than zero".to_string());
        } else if self.notification_ttl_ms > MAX_NOTIFICATION_TTL_MS {
            out.push(format!(
                "NOTIFICATION_TTL_MS must be at most {}, got {}",
                MAX_NOTIFICATION_TTL_MS, self.notification_ttl_ms
            ));
        }
        if let Err(e) = self.contact_rule().compile() {
            out.push(e.to_string());
        }
        out
    }
}
