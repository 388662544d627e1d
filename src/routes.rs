use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    let static_routes: Router<AppState> = Router::new()
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(CONTENT_TYPE, "text/css")], css) }
            }),
        )
        .layer(
            ServiceBuilder::new().layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=3600"),
            )),
        );

    Router::new()
        .route("/", get(handlers::pricing::pricing_get))
        .route("/order/open/:plan_id", post(handlers::order::order_open_post))
        .route("/order/submit", post(handlers::order::order_submit_post))
        .route("/order/cancel", post(handlers::order::order_cancel_post))
        .route("/quick/:service", post(handlers::quick::quick_post))
        .route("/api/plans", get(handlers::api::plans_get))
        .route("/api/order", get(handlers::api::order_state_get))
        .merge(static_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
