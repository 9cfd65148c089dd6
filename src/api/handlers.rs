use std::collections::BTreeMap;

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde_json::json;
use tracing::{debug, error, info, instrument};

use crate::{
    error::LinkError,
    state::AppState,
    types::{HealthResponse, ShortenRequest, ShortenResponse},
    utils::valid_short_code,
};

#[instrument]
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    };
    (StatusCode::OK, Json(response))
}

#[instrument(skip(state, payload))]
pub async fn create_short_url(
    State(state): State<AppState>,
    payload: Result<Form<ShortenRequest>, FormRejection>,
) -> Response {
    let payload = match payload {
        Ok(Form(payload)) => payload,
        Err(rejection) => {
            let error_message = match rejection {
                FormRejection::InvalidFormContentType(_) => {
                    json!({"error": "Expected 'Content-Type: application/x-www-form-urlencoded' header"})
                }
                FormRejection::FailedToDeserializeForm(_)
                | FormRejection::FailedToDeserializeFormBody(_) => {
                    json!({"error": "Form field 'data' is required"})
                }
                _ => json!({"error": "Unknown form parsing error"}),
            };
            error!(error = ?rejection, "Form parsing error");
            return (StatusCode::BAD_REQUEST, Json(error_message)).into_response();
        }
    };

    match state.store.create(&payload.data) {
        Ok(record) => {
            info!(url_id = %record.url_id, url = %record.url, "Created short URL");
            let response = ShortenResponse {
                url_id: record.url_id,
                url: record.url,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create short URL");
            e.into_response()
        }
    }
}

#[instrument(skip(state))]
pub async fn redirect_short_url(
    State(state): State<AppState>,
    Path(url_id): Path<String>,
) -> Result<Response, LinkError> {
    if !valid_short_code(&url_id.to_ascii_uppercase()) {
        debug!(url_id = %url_id, "Not a short code");
        return Err(LinkError::NotFound(url_id));
    }

    let long_url = state.store.get(&url_id).inspect_err(|_| {
        error!(url_id = %url_id, "Short code not found");
    })?;

    info!(url_id = %url_id, "Redirecting to long URL");
    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response())
}

#[instrument(skip(state))]
pub async fn get_all_short_urls(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    let links = state.store.list_all();
    debug!(count = links.len(), "Listing short URLs");
    Json(links)
}
