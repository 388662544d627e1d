use askama::Template;

use crate::catalog::Plan;
use crate::models::{DialogView, GameOption, NotificationView, QuickLineView};
use crate::validator::OrderInput;

#[derive(Template)]
#[template(path = "pricing.html")]
pub struct PricingTemplate<'a> {
    pub messaging_host: String,
    pub notifications: Vec<NotificationView>,
    pub has_notifications: bool,
    pub plans: &'a [Plan],
    pub dialog: Option<DialogView>,
    pub form: OrderInput,
    pub games: Vec<GameOption>,
    pub quick_lines: Vec<QuickLineView>,
    pub pending_handoff: Option<String>,
    /// `pending_handoff` as a JS string literal.
    pub pending_handoff_js: String,
}
