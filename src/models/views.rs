use chrono::{DateTime, Utc};

use crate::catalog::GameType;
use crate::notify::Notification;
use crate::quick::ServiceLine;

pub struct DialogView {
    pub summary: String,
}

pub struct GameOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl GameOption {
    pub fn list(selected: &str) -> Vec<GameOption> {
        let current = GameType::parse(selected);
        GameType::ALL
            .iter()
            .map(|g| GameOption {
                value: g.as_str(),
                label: g.display_name(),
                selected: current == Some(*g),
            })
            .collect()
    }
}

pub struct NotificationView {
    pub icon: &'static str,
    pub css_class: &'static str,
    pub message: String,
    pub remaining_ms: i64,
}

impl NotificationView {
    pub fn from_notification(n: &Notification, now: DateTime<Utc>) -> Self {
        Self {
            icon: n.severity.icon(),
            css_class: n.severity.css_class(),
            message: n.message.clone(),
            remaining_ms: n.remaining_ms(now),
        }
    }
}

pub struct QuickLineView {
    pub slug: &'static str,
    pub label: &'static str,
    pub packages: &'static [&'static str],
}

impl QuickLineView {
    pub fn all() -> Vec<QuickLineView> {
        ServiceLine::ALL
            .iter()
            .map(|l| QuickLineView {
                slug: l.slug(),
                label: l.label(),
                packages: l.packages(),
            })
            .collect()
    }
}
