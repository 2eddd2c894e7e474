//! Middleware for logging requests and responses.

use axum::{extract::Request, middleware::Next, response::Response};

/// The maximum number of body bytes included in a log line.
///
/// Longer bodies are truncated at the `info` level and logged in full at the
/// `debug` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and logged in full at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body_text) = extract_parts_and_body_text_from_request(request).await;
    log_message(&format!("Received request: {} {}", parts.method, parts.uri), &body_text);

    let request = Request::from_parts(parts, body_text.into());
    let response = next.run(request).await;

    let (parts, body_text) = extract_parts_and_body_text_from_response(response).await;
    log_message(&format!("Sending response: {}", parts.status), &body_text);

    Response::from_parts(parts, body_text.into())
}

async fn extract_parts_and_body_text_from_request(
    request: Request,
) -> (axum::http::request::Parts, String) {
    let (parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    (parts, String::from_utf8_lossy(&body_bytes).to_string())
}

async fn extract_parts_and_body_text_from_response(
    response: Response,
) -> (axum::http::response::Parts, String) {
    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    (parts, String::from_utf8_lossy(&body_bytes).to_string())
}

fn log_message(headline: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "{headline}\nbody: {}...",
            &body[..truncation_index(body)]
        );
        tracing::debug!("Full body: {body:?}");
    } else {
        tracing::info!("{headline}\nbody: {body:?}");
    }
}

/// The largest index at or below [LOG_BODY_LENGTH_LIMIT] that is a UTF-8
/// character boundary.
fn truncation_index(body: &str) -> usize {
    let mut index = LOG_BODY_LENGTH_LIMIT;

    while !body.is_char_boundary(index) {
        index -= 1;
    }

    index
}

#[cfg(test)]
mod truncation_tests {
    use super::{LOG_BODY_LENGTH_LIMIT, truncation_index};

    #[test]
    fn truncates_at_limit_for_ascii() {
        let body = "a".repeat(LOG_BODY_LENGTH_LIMIT * 2);

        assert_eq!(truncation_index(&body), LOG_BODY_LENGTH_LIMIT);
    }

    #[test]
    fn backs_off_to_a_character_boundary() {
        // Each kanji is three bytes, so the limit lands mid-character.
        let body = "円".repeat(LOG_BODY_LENGTH_LIMIT);

        let index = truncation_index(&body);

        assert!(index <= LOG_BODY_LENGTH_LIMIT);
        assert!(body.is_char_boundary(index));
    }
}
