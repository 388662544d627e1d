//! Seams between the order workflow and whatever hosts it.
//!
//! The web page and the terminal each provide their own implementations;
//! tests use the recording ones below.

use crate::notify::Severity;

/// Rendering side of the order dialog.
pub trait PresentationPort {
    /// Make the order dialog visible with the selected plan's summary.
    fn show_dialog(&mut self, plan_summary: &str);
    fn hide_dialog(&mut self);
    /// Clear every user-editable field of the order form.
    fn reset_form(&mut self);
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Opens links outside the page, in a new navigation context.
pub trait NavigationPort {
    /// Fire-and-forget: whether the host actually opened the link is not observed.
    fn open_external(&mut self, url: &str);
}

/// Records every call; used by tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    pub dialog: Option<String>,
    pub form_resets: usize,
    pub notifications: Vec<(String, Severity)>,
}

impl PresentationPort for RecordingPresenter {
    fn show_dialog(&mut self, plan_summary: &str) {
        self.dialog = Some(plan_summary.to_string());
    }

    fn hide_dialog(&mut self) {
        self.dialog = None;
    }

    fn reset_form(&mut self) {
        self.form_resets += 1;
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        self.notifications.push((message.to_string(), severity));
    }
}

#[derive(Debug, Default, Clone)]
pub struct RecordingNavigator {
    pub opened: Vec<String>,
}

impl NavigationPort for RecordingNavigator {
    fn open_external(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}
