use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;

use crate::error::OrderError;
use crate::models::AppState;
use crate::validator::OrderInput;

use super::helpers::ensure_session;

pub async fn order_open_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(plan_id): Path<String>,
) -> impl IntoResponse {
    let (jar, sid) = ensure_session(jar);
    // an unknown plan is a broken button, not something to tell the customer
    let _ = state.with_session(&sid, |session| session.controller.open(&plan_id).map(|_| ()));
    (jar, Redirect::to("/"))
}

pub async fn order_submit_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<OrderInput>,
) -> impl IntoResponse {
    let (jar, sid) = ensure_session(jar);
    state.with_session(&sid, |session| {
        let controller = &mut session.controller;
        controller.presenter_mut().form = input.clone();
        match controller.submit(&input) {
            Ok(_) => {}
            Err(OrderError::NoActivePlan) => {
                tracing::debug!("Order form submitted without a selected plan");
                controller.presenter_mut().form = OrderInput::default();
            }
            Err(e) => tracing::debug!(error = %e, "Order form sent back for correction"),
        }
    });
    (jar, Redirect::to("/"))
}

pub async fn order_cancel_post(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, sid) = ensure_session(jar);
    state.with_session(&sid, |session| session.controller.cancel());
    (jar, Redirect::to("/"))
}
