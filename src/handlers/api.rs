use axum::{extract::State, response::IntoResponse, Json};
use axum_extra::extract::cookie::CookieJar;

use crate::catalog::Catalog;
use crate::models::AppState;

use super::helpers::ensure_session;

pub async fn plans_get() -> impl IntoResponse {
    Json(Catalog::builtin().plans())
}

/// The visitor's dialog state: `{"state":"closed"}` or `{"state":"open","plan":"pro"}`.
pub async fn order_state_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, sid) = ensure_session(jar);
    let current = state.with_session(&sid, |session| session.controller.state());
    (jar, Json(current))
}
