use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::handoff::HandoffTarget;
use crate::notify::{NotificationCenter, Severity};
use crate::ports::{NavigationPort, PresentationPort};
use crate::validator::{OrderInput, Validator};
use crate::workflow::OrderController;

/// What the pricing page shows for one visitor: dialog, form values, notifications.
#[derive(Debug, Clone, Default)]
pub struct PagePresenter {
    pub dialog_summary: Option<String>,
    /// Values echoed back into the form after a rejected submission.
    pub form: OrderInput,
    pub notifications: NotificationCenter,
}

impl PresentationPort for PagePresenter {
    fn show_dialog(&mut self, plan_summary: &str) {
        self.dialog_summary = Some(plan_summary.to_string());
    }

    fn hide_dialog(&mut self) {
        self.dialog_summary = None;
    }

    fn reset_form(&mut self) {
        self.form = OrderInput::default();
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        self.notifications.notify(message, severity);
    }
}

/// The browser opens the link on the next page render, in a new tab.
#[derive(Debug, Clone, Default)]
pub struct PageNavigator {
    pending: Option<String>,
}

impl PageNavigator {
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending.take()
    }
}

impl NavigationPort for PageNavigator {
    fn open_external(&mut self, url: &str) {
        self.pending = Some(url.to_string());
    }
}

pub type PageController = OrderController<PagePresenter, PageNavigator>;

pub struct PageSession {
    pub controller: PageController,
    pub last_seen: DateTime<Utc>,
}

impl PageSession {
    pub fn new(settings: &Settings, validator: &Validator) -> Self {
        let presenter = PagePresenter {
            notifications: NotificationCenter::new(settings.notification_ttl_ms),
            ..Default::default()
        };
        Self {
            controller: OrderController::new(
                validator.clone(),
                HandoffTarget::new(&settings.messaging_base_url, &settings.order_recipient),
                presenter,
                PageNavigator::default(),
            ),
            last_seen: Utc::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_seen = Utc::now();
    }
}
