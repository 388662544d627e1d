use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::Utc;
use hex::encode as hex_encode;
use rand::RngCore;

use crate::models::{AppState, NotificationView, PageSession};

pub const SESSION_COOKIE: &str = "session_id";

pub fn random_session_id() -> String {
    let mut b = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut b);
    hex_encode(b)
}

pub fn session_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

/// Return the visitor's session id, issuing a new cookie when there is none.
pub fn ensure_session(jar: CookieJar) -> (CookieJar, String) {
    if let Some(sid) = session_id_from_jar(&jar) {
        return (jar, sid);
    }
    let sid = random_session_id();
    let mut cookie = Cookie::new(SESSION_COOKIE, sid.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    (jar.add(cookie), sid)
}

#[derive(Default)]
pub struct TemplateGlobals {
    pub messaging_host: String,
    pub notifications: Vec<NotificationView>,
    pub has_notifications: bool,
}

pub fn build_template_globals(state: &AppState, session: &mut PageSession) -> TemplateGlobals {
    let now = Utc::now();
    let notifications: Vec<NotificationView> = session
        .controller
        .presenter_mut()
        .notifications
        .active(now)
        .iter()
        .map(|n| NotificationView::from_notification(n, now))
        .collect();
    let has_notifications = !notifications.is_empty();
    TemplateGlobals {
        messaging_host: crate::utils::hostname_from_url(&state.settings.messaging_base_url),
        notifications,
        has_notifications,
    }
}

pub fn plain_html<S: AsRef<str>>(status: StatusCode, s: S) -> Response {
    (
        status,
        Html(format!("<!DOCTYPE html><html><body><p>{}</p></body></html>", s.as_ref())),
    )
        .into_response()
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
