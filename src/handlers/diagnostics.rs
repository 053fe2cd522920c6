//! # Diagnostic Handlers
//!
//! HTTP endpoints used to verify the service is up and responding.
//!
//! ## Endpoints
//!
//! - `GET /` - Returns a random number, confirming the request path works end to end.
//!
//! ## Authentication
//!
//! These endpoints are public and do not require authentication.

use crate::types::{ErrorResponse, NumberResponse};
use axum::{http::StatusCode, Json};
use rand::Rng;
use tracing::{debug, instrument};

/// Return a random number between 1 and 100.
///
/// **Route**: `GET /`
///
/// # Returns
///
/// Success (200): `Json<NumberResponse>` with `number` drawn uniformly from
/// 1..=100. Each request draws independently; no state is carried between calls.
///
/// # Example
///
/// ```bash
/// curl http://localhost:3001/
/// ```
///
/// Response:
/// ```json
/// {"number": 42}
/// ```
#[instrument]
pub async fn random_number() -> (StatusCode, Json<NumberResponse>) {
    let number = rand::thread_rng().gen_range(1..=100);
    debug!("[DIAG] Returning number {}", number);
    (StatusCode::OK, Json(NumberResponse { number }))
}

/// JSON 404 for unmatched routes.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Route not found".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_ok_with_number_in_range() {
        let (status, Json(body)) = random_number().await;

        assert_eq!(status, StatusCode::OK);
        assert!((1..=100).contains(&body.number));
    }

    #[tokio::test]
    async fn repeated_draws_stay_in_range() {
        for _ in 0..1000 {
            let (status, Json(body)) = random_number().await;
            assert_eq!(status, StatusCode::OK);
            assert!((1..=100).contains(&body.number));
        }
    }

    #[tokio::test]
    async fn draws_cover_more_than_one_value() {
        // 1000 draws from a 100-value range collapsing to a single value
        // would mean the generator is broken, not unlucky.
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let (_, Json(body)) = random_number().await;
            seen.insert(body.number);
        }
        assert!(seen.len() > 1);
    }

    #[tokio::test]
    async fn not_found_returns_json_error() {
        let (status, Json(body)) = not_found().await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Route not found");
    }
}
