use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;

use crate::catalog::Catalog;
use crate::models::{AppState, DialogView, GameOption, QuickLineView};
use crate::templates::PricingTemplate;

use super::helpers::{build_template_globals, ensure_session, render_template, TemplateGlobals};

pub async fn pricing_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, sid) = ensure_session(jar);
    let page = state.with_session(&sid, |session| {
        let TemplateGlobals {
            messaging_host,
            notifications,
            has_notifications,
        } = build_template_globals(&state, session);
        let controller = &mut session.controller;
        let dialog = controller
            .presenter()
            .dialog_summary
            .clone()
            .map(|summary| DialogView { summary });
        let form = controller.presenter().form.clone();
        let pending_handoff = controller.navigator_mut().take_pending();
        let pending_handoff_js = serde_json::to_string(&pending_handoff).unwrap_or_else(|_| "null".into());
        render_template(PricingTemplate {
            messaging_host,
            notifications,
            has_notifications,
            plans: Catalog::builtin().plans(),
            dialog,
            games: GameOption::list(&form.game_type),
            form,
            quick_lines: QuickLineView::all(),
            pending_handoff,
            pending_handoff_js,
        })
    });
    (jar, page)
}
