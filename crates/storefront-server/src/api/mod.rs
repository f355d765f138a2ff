mod portfolio;
mod relay;

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use storefront_core::Gallery;
use storefront_whatsapp::WhatsAppClient;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub whatsapp: WhatsAppClient,
    /// Recipient used when a relay request names none.
    pub default_recipient: String,
    pub gallery: Arc<Gallery>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/portfolio", get(portfolio::list_portfolio))
        .route(
            "/api/whatsapp-send",
            post(relay::send_order)
                .options(relay::preflight)
                .fallback(relay::method_not_allowed),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(build_cors()),
        )
        .with_state(state)
}

fn request_span(req: &Request) -> tracing::Span {
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map_or("", |id| id.0.as_str());
    tracing::info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        request_id
    )
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}
