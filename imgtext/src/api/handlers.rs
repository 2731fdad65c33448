use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::api::extractors::GatewayEvent;
use crate::api::state::AppState;
use crate::error::ImgtextError;
use crate::models::HttpResponse;

/// Any method, any path: the function has a single behavior.
pub async fn invoke(
    State(state): State<AppState>,
    GatewayEvent(request): GatewayEvent,
) -> Result<HttpResponse, ImgtextError> {
    state.handler.handle(&request).await
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();

        let headers = response.headers_mut();
        for (name, value) in self.headers.entries() {
            match HeaderValue::from_str(value) {
                Ok(value) => {
                    headers.insert(name, value);
                }
                Err(e) => tracing::warn!(header = name, error = %e, "Dropping invalid header"),
            }
        }

        response
    }
}
