use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::models::AppState;
use crate::notify::Severity;
use crate::ports::PresentationPort;
use crate::quick::{quick_handoff, ServiceLine};

use super::helpers::{ensure_session, plain_html};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct QuickForm {
    pub package: String,
}

/// Redirects straight to the messaging service; the page opens this form in a new tab.
pub async fn quick_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(service): Path<String>,
    Form(form): Form<QuickForm>,
) -> Response {
    let line = match ServiceLine::parse(&service) {
        Ok(l) => l,
        Err(e) => {
            tracing::debug!(error = %e, "Quick order for unknown service");
            return plain_html(StatusCode::NOT_FOUND, "Layanan tidak ditemukan");
        }
    };
    match quick_handoff(line, &form.package, &state.settings) {
        Ok(handoff) => Redirect::to(&handoff.url).into_response(),
        Err(e) => {
            let (jar, sid) = ensure_session(jar);
            state.with_session(&sid, |session| {
                session
                    .controller
                    .presenter_mut()
                    .notify(&e.to_string(), Severity::Error)
            });
            (jar, Redirect::to("/")).into_response()
        }
    }
}
