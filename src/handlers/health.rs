use crate::error::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// Performs a trivial round trip to the store to verify connectivity.
/// Returns 200 OK if the store is reachable, 503 Service Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), (StatusCode, Json<UnhealthyResponse>)> {
    match state.store.health_check().await {
        Ok(_) => {
            tracing::debug!("Health check passed");
            Ok((
                StatusCode::OK,
                Json(HealthResponse {
                    status: "healthy".to_string(),
                }),
            ))
        }
        Err(e) => {
            tracing::error!("Health check failed: {:#}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyResponse {
                    status: "unhealthy".to_string(),
                    error: format!("Cannot connect to store: {}", e),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{HealthResponse, UnhealthyResponse};
    use crate::handlers::test_support::{failing_app, memory_app, send};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let (app, _store) = memory_app();

        let response = send(&app, "GET", "/health", None).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json::<HealthResponse>().status, "healthy");
    }

    #[tokio::test]
    async fn test_health_endpoint_unhealthy() {
        let app = failing_app();

        let response = send(&app, "GET", "/health", None).await;

        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        let body: UnhealthyResponse = response.json();
        assert_eq!(body.status, "unhealthy");
        assert!(body.error.contains("Cannot connect to store"));
    }
}
