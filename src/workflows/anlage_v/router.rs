use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::{debug, error};

use super::auth::{bearer_token, Authenticator};
use super::buildings::BuildingRepository;
use super::service::{PlausibilityRequest, PlausibilityService, PlausibilityServiceError};

pub(crate) struct PlausibilityState<R, A> {
    pub(crate) service: Arc<PlausibilityService<R>>,
    pub(crate) authenticator: Arc<A>,
}

impl<R, A> Clone for PlausibilityState<R, A> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

/// Router builder exposing the Anlage V validation endpoint.
pub fn plausibility_router<R, A>(
    service: Arc<PlausibilityService<R>>,
    authenticator: Arc<A>,
) -> Router
where
    R: BuildingRepository + 'static,
    A: Authenticator + 'static,
{
    Router::new()
        .route("/api/v1/anlage-v/validate", post(validate_handler::<R, A>))
        .with_state(PlausibilityState {
            service,
            authenticator,
        })
}

pub(crate) async fn validate_handler<R, A>(
    State(state): State<PlausibilityState<R, A>>,
    headers: HeaderMap,
    payload: Result<Json<PlausibilityRequest>, JsonRejection>,
) -> Response
where
    R: BuildingRepository + 'static,
    A: Authenticator + 'static,
{
    let user = bearer_token(&headers).and_then(|token| state.authenticator.authenticate(token));
    let Some(user) = user else {
        return error_response(StatusCode::UNAUTHORIZED, "unauthorized");
    };

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, &rejection.body_text());
        }
    };

    debug!(user = %user.id, "anlage v validation requested");

    match state.service.check(request) {
        Ok(report) => (StatusCode::OK, Json(report.response())).into_response(),
        Err(PlausibilityServiceError::MissingFormData) => error_response(
            StatusCode::BAD_REQUEST,
            &PlausibilityServiceError::MissingFormData.to_string(),
        ),
        Err(other) => {
            error!(error = %other, "anlage v validation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string())
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
