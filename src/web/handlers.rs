use axum::{
    Form, Json,
    extract::{Query, State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header::SET_COOKIE},
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, warn};

use super::page::{self, PageView};
use super::session::Session;
use super::state::AppState;
use crate::translation::{EXAMPLES, TranslateError, TranslationDirection, TranslationRequest};

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub example: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct TranslateForm {
    #[serde(default)]
    pub source_text: String,
    #[serde(default)]
    pub direction: String,
    /// Contents of the read-only output area when the form was submitted.
    #[serde(default)]
    pub previous_output: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiTranslateRequest {
    pub text: String,
    pub direction: String,
}

#[derive(Debug, Serialize)]
pub struct ApiTranslateResponse {
    pub translated_text: String,
    pub direction: TranslationDirection,
    pub latency_seconds: f64,
}

pub async fn index(
    Query(query): Query<IndexQuery>,
    headers: HeaderMap,
) -> Response {
    let session = Session::from_headers(&headers);

    let view = query
        .example
        .and_then(|index| EXAMPLES.get(index))
        .map_or_else(PageView::default, |example| PageView {
            source_text: example.source_text.to_string(),
            direction: example.direction,
            ..PageView::default()
        });

    page_response(StatusCode::OK, &view, &session)
}

pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<TranslateForm>,
) -> Response {
    let session = Session::from_headers(&headers);
    let source_text = form.source_text.replace("\r\n", "\n");
    let previous_output = form.previous_output.replace("\r\n", "\n");

    let direction = match form.direction.parse::<TranslationDirection>() {
        Ok(direction) => direction,
        Err(e) => {
            warn!(direction = %form.direction, "rejected form submission");
            let view = PageView {
                source_text,
                direction: TranslationDirection::default(),
                output: previous_output,
                notice: Some(e.to_string()),
            };
            return page_response(StatusCode::BAD_REQUEST, &view, &session);
        }
    };

    let Some(_in_flight) = state.sessions.try_begin(session.id) else {
        info!(session = %session.id, "overlapping submission rejected");
        let view = PageView {
            source_text,
            direction,
            output: previous_output,
            notice: Some("A translation is already in progress for this session.".to_string()),
        };
        return page_response(StatusCode::TOO_MANY_REQUESTS, &view, &session);
    };

    let request = TranslationRequest::new(source_text, direction);
    let (output, notice) = match state.client.translate(&request).await {
        Ok(response) => (response.translated_text, None),
        // Empty input leaves the output area as it was.
        Err(TranslateError::EmptyInput) => (previous_output, None),
        Err(e) => (previous_output, Some(e.to_string())),
    };

    let view = PageView {
        source_text: request.source_text,
        direction,
        output,
        notice,
    };
    page_response(StatusCode::OK, &view, &session)
}

pub async fn api_translate(
    State(state): State<AppState>,
    payload: Result<Json<ApiTranslateRequest>, JsonRejection>,
) -> Result<Json<ApiTranslateResponse>, (StatusCode, Json<Value>)> {
    let Json(payload) = payload.map_err(|rejection| {
        let message = rejection.body_text();
        warn!(error = %message, "rejected API request body");
        (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
    })?;

    let direction = payload
        .direction
        .parse::<TranslationDirection>()
        .map_err(api_error)?;

    let request = TranslationRequest::new(payload.text, direction);
    let response = state.client.translate(&request).await.map_err(api_error)?;

    Ok(Json(ApiTranslateResponse {
        translated_text: response.translated_text,
        direction,
        latency_seconds: response.latency.as_secs_f64(),
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn api_error(err: TranslateError) -> (StatusCode, Json<Value>) {
    let status = match &err {
        TranslateError::EmptyInput | TranslateError::UnsupportedDirection(_) => {
            StatusCode::BAD_REQUEST
        }
        TranslateError::Transport { timed_out: true, .. } => StatusCode::GATEWAY_TIMEOUT,
        TranslateError::RemoteService { .. } | TranslateError::Transport { .. } => {
            StatusCode::BAD_GATEWAY
        }
    };
    (status, Json(json!({ "error": err.to_string() })))
}

fn page_response(status: StatusCode, view: &PageView, session: &Session) -> Response {
    let mut response = (status, Html(page::render(view))).into_response();
    if let Some(cookie) = session.set_cookie()
        && let Ok(value) = HeaderValue::from_str(&cookie)
    {
        response.headers_mut().insert(SET_COOKIE, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_api_error_status_mapping() {
        assert_eq!(api_error(TranslateError::EmptyInput).0, StatusCode::BAD_REQUEST);
        assert_eq!(
            api_error(TranslateError::UnsupportedDirection("x".to_string())).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            api_error(TranslateError::RemoteService {
                status: 500,
                message: "overloaded".to_string()
            })
            .0,
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            api_error(TranslateError::timeout(Duration::from_secs(30))).0,
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            api_error(TranslateError::transport("refused")).0,
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_api_error_body_carries_message() {
        let (_, Json(body)) = api_error(TranslateError::RemoteService {
            status: 500,
            message: "overloaded".to_string(),
        });
        assert_eq!(body["error"], "Error 500: overloaded");
    }
}
