//! `POST /api/whatsapp-send`: forwards an order to the WhatsApp Cloud API as
//! an image message.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use storefront_core::{compose_message, RelayRequest, RelayResponse};

use super::AppState;

const MISSING_FIELDS: &str = "Missing required fields: productName and imageUrl";
const METHOD_NOT_ALLOWED: &str = "Method not allowed";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

fn rejection(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

fn failure(error: impl Into<String>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(RelayResponse::failed(error)),
    )
        .into_response()
}

pub(super) async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub(super) async fn method_not_allowed() -> Response {
    rejection(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
}

/// The body is parsed by hand so that malformed JSON is reported in the
/// relay's own failure shape instead of axum's rejection text.
pub(super) async fn send_order(State(state): State<AppState>, body: Bytes) -> Response {
    let request: RelayRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "relay request body is not valid JSON");
            return failure(e.to_string());
        }
    };

    let (Some(product_name), Some(image_url)) = (
        RelayRequest::field(request.product_name.as_ref()),
        RelayRequest::field(request.image_url.as_ref()),
    ) else {
        return rejection(StatusCode::BAD_REQUEST, MISSING_FIELDS);
    };

    let recipient = RelayRequest::field(request.recipient_phone.as_ref())
        .unwrap_or(&state.default_recipient);
    let caption = compose_message(
        product_name,
        RelayRequest::field(request.product_price.as_ref()),
        None,
    );

    match state.whatsapp.send_image(recipient, image_url, &caption).await {
        Ok(data) => {
            tracing::info!(product = product_name, to = recipient, "order relayed to WhatsApp");
            (StatusCode::OK, Json(RelayResponse::sent(data))).into_response()
        }
        Err(e) => {
            tracing::error!(product = product_name, error = %e, "WhatsApp send failed");
            failure(e.to_string())
        }
    }
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
