use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::{DEFAULT_NOTIFICATION_TTL_MS, MAX_NOTIFICATION_TTL_MS};

/// Maximum number of notifications kept at once.
const MAX_NOTIFICATIONS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Error => "❌",
            Severity::Info => "ℹ️",
        }
    }

    /// CSS modifier used by the page (`notification-error`, ...).
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "notification-info",
            Severity::Success => "notification-success",
            Severity::Error => "notification-error",
        }
    }
}

/// Transient feedback; disappears on its own once `ttl` has elapsed.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub issued_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl Notification {
    /// `None` when the expiry is past the end of representable time; such a
    /// notification never expires.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.issued_at.checked_add_signed(self.ttl)
    }

    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().map_or(true, |at| now < at)
    }

    /// Milliseconds of life left at `now`, used by the page to schedule removal.
    pub fn remaining_ms(&self, now: DateTime<Utc>) -> i64 {
        match self.expires_at() {
            Some(at) => (at - now).num_milliseconds().max(0),
            None => i64::MAX,
        }
    }
}

/// Holds the notifications of one page; each one manages its own lifetime.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
    next_id: u64,
    ttl: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL_MS)
    }
}

impl NotificationCenter {
    /// `ttl_ms` is capped at [`MAX_NOTIFICATION_TTL_MS`].
    pub fn new(ttl_ms: u64) -> Self {
        let ms = i64::try_from(ttl_ms.min(MAX_NOTIFICATION_TTL_MS)).unwrap_or(i64::MAX);
        Self {
            entries: Vec::new(),
            next_id: 1,
            ttl: Duration::milliseconds(ms),
        }
    }

    pub fn notify(&mut self, message: &str, severity: Severity) -> u64 {
        self.notify_at(message, severity, Utc::now())
    }

    pub fn notify_at(&mut self, message: &str, severity: Severity, now: DateTime<Utc>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notification {
            id,
            message: message.to_string(),
            severity,
            issued_at: now,
            ttl: self.ttl,
        });
        if self.entries.len() > MAX_NOTIFICATIONS {
            let excess = self.entries.len() - MAX_NOTIFICATIONS;
            self.entries.drain(..excess);
        }
        id
    }

    /// Drop expired notifications and return the live ones, oldest first.
    pub fn active(&mut self, now: DateTime<Utc>) -> Vec<Notification> {
        self.entries.retain(|n| n.is_live(now));
        self.entries.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_expire_independently() {
        let mut center = NotificationCenter::new(4000);
        let t0 = Utc::now();
        center.notify_at("first", Severity::Error, t0);
        center.notify_at("second", Severity::Success, t0 + Duration::milliseconds(3000));

        let live = center.active(t0 + Duration::milliseconds(1000));
        assert_eq!(live.len(), 2);
        assert_eq!(live[0].message, "first");

        let live = center.active(t0 + Duration::milliseconds(4500));
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].message, "second");
        assert_eq!(live[0].remaining_ms(t0 + Duration::milliseconds(4500)), 2500);

        assert!(center.active(t0 + Duration::milliseconds(7000)).is_empty());
        assert!(center.is_empty());
    }

    #[test]
    fn ids_increase() {
        let mut center = NotificationCenter::default();
        let a = center.notify("a", Severity::Info);
        let b = center.notify("b", Severity::Info);
        assert!(b > a);
    }

    #[test]
    fn old_entries_are_evicted_past_the_cap() {
        let mut center = NotificationCenter::new(60_000);
        let now = Utc::now();
        for i in 0..30 {
            center.notify_at(&format!("n{}", i), Severity::Info, now);
        }
        let live = center.active(now);
        assert_eq!(live.len(), MAX_NOTIFICATIONS);
        assert_eq!(live[0].message, "n10");
    }

    #[test]
    fn oversized_ttl_is_capped_instead_of_overflowing() {
        let t0 = Utc::now();
        for ttl in [10_000_000_000_000_000, u64::MAX] {
            let mut center = NotificationCenter::new(ttl);
            center.notify_at("hi", Severity::Info, t0);
            let live = center.active(t0);
            assert_eq!(live.len(), 1);
            assert_eq!(live[0].remaining_ms(t0), MAX_NOTIFICATION_TTL_MS as i64);
            assert!(center.active(t0 + Duration::milliseconds(MAX_NOTIFICATION_TTL_MS as i64)).is_empty());
        }
    }

    #[test]
    fn expiry_past_end_of_time_never_expires() {
        let n = Notification {
            id: 1,
            message: "late".into(),
            severity: Severity::Info,
            issued_at: DateTime::<Utc>::MAX_UTC,
            ttl: Duration::milliseconds(1000),
        };
        assert_eq!(n.expires_at(), None);
        assert!(n.is_live(DateTime::<Utc>::MAX_UTC));
        assert_eq!(n.remaining_ms(Utc::now()), i64::MAX);
    }

    #[test]
    fn severity_icons_and_classes() {
        assert_eq!(Severity::Success.icon(), "✅");
        assert_eq!(Severity::Error.css_class(), "notification-error");
    }
}
