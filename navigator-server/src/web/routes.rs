//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::{TimeDelta, Utc};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::planner::PlanError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/greeting", get(greeting))
        .route("/api/v1/routes/plan", post(plan_route))
        .route("/api/v1/routes/stats", delete(purge_stats))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn greeting(State(state): State<AppState>) -> String {
    state.greeting.to_string()
}

/// Plan a route between two points.
async fn plan_route(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RouteResult>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanRouteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "rejected plan request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let query = req
        .validate()
        .map_err(|details| AppError::Validation { details })?;

    let response = state.routes.plan_route(query).await?;
    Ok(Json(response.into()))
}

/// Remove statistics older than the given number of days.
async fn purge_stats(
    State(state): State<AppState>,
    params: Result<Query<PurgeStatsParams>, QueryRejection>,
) -> Result<Json<PurgeStatsResponse>, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let cutoff = TimeDelta::try_days(i64::from(params.older_than_days))
        .and_then(|age| Utc::now().checked_sub_signed(age))
        .ok_or_else(|| AppError::BadRequest {
            message: format!("olderThanDays out of range: {}", params.older_than_days),
        })?;
    let deleted = state.routes.purge_stats_older_than(cutoff).await?;

    Ok(Json(PurgeStatsResponse { deleted }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// One or more request fields are invalid.
    Validation { details: Vec<String> },
    BadRequest { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::UnsupportedMode { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            PlanError::Persistence(_) | PlanError::Audit(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::Validation { details } => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                details,
            ),
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, Vec::new()),
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, Vec::new())
            }
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, ?details, "request rejected");
        }

        let body = Json(ErrorResponse {
            timestamp: Utc::now().to_rfc3339(),
            status: status.as_u16(),
            message,
            details,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::audit::AuditRecorder;
    use crate::planner::{PlannerConfig, RoutePlanner};
    use crate::service::{ROUTE_PLANNED, RouteService};
    use crate::store::{AuditStore, InMemoryAuditStore, InMemoryStatsStore, StatsStore};
    use crate::strategy::StrategyRegistry;

    fn test_state() -> AppState {
        let registry = Arc::new(StrategyRegistry::standard().unwrap());
        let planner = RoutePlanner::new(
            registry,
            InMemoryStatsStore::new(),
            &PlannerConfig::default(),
        );
        let routes = RouteService::new(planner, AuditRecorder::new(InMemoryAuditStore::new()));
        AppState::new(routes, "Hola desde el navegador")
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = create_router(state.clone())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn plan_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/routes/plan")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn gdl_to_cdmx(mode: &str) -> Value {
        json!({
            "origin": { "lat": 20.6736, "lon": -103.344 },
            "destination": { "lat": 19.4326, "lon": -99.1332 },
            "mode": mode,
        })
    }

    #[tokio::test]
    async fn health_check() {
        let state = test_state();
        let request = Request::get("/health").body(Body::empty()).unwrap();

        let (status, body) = send(&state, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn greeting_is_configured_message() {
        let state = test_state();
        let request = Request::get("/api/v1/greeting").body(Body::empty()).unwrap();

        let (status, body) = send(&state, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(String::from_utf8(body).unwrap(), "Hola desde el navegador");
    }

    #[tokio::test]
    async fn plan_returns_route() {
        let state = test_state();

        let (status, body) = send(&state, plan_request(gdl_to_cdmx("CAR"))).await;

        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["mode"], "CAR");
        assert_eq!(json["distanceKm"], 460.95);
        assert_eq!(json["durationMinutes"], 346);
        assert_eq!(json["steps"].as_array().unwrap().len(), 3);

        assert_eq!(state.routes.planner().stats().count().await, Ok(1));
        assert_eq!(state.routes.audit().store().count().await, Ok(1));
    }

    #[tokio::test]
    async fn unsupported_mode_is_bad_request() {
        let state = test_state();

        let (status, body) = send(&state, plan_request(gdl_to_cdmx("PLANE"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], 400);
        assert!(json["message"].as_str().unwrap().contains("PLANE"));
        assert!(json["timestamp"].is_string());

        let entries = state.routes.audit().store().all().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, ROUTE_PLANNED);
        assert_eq!(state.routes.planner().stats().count().await, Ok(0));
    }

    #[tokio::test]
    async fn invalid_coordinates_list_every_field() {
        let state = test_state();
        let body = json!({
            "origin": { "lat": 95.0, "lon": 0.0 },
            "mode": "CAR",
        });

        let (status, body) = send(&state, plan_request(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Validation failed");
        let details = json["details"].as_array().unwrap();
        assert_eq!(details.len(), 2);
        assert!(details[0].as_str().unwrap().starts_with("origin.lat"));
        assert_eq!(details[1], "destination: must not be null");

        // Rejected before reaching the planner, so nothing is audited.
        assert_eq!(state.routes.audit().store().count().await, Ok(0));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let state = test_state();
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/routes/plan")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"origin\":"))
            .unwrap();

        let (status, body) = send(&state, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json["message"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn purge_stats_by_age() {
        let state = test_state();
        send(&state, plan_request(gdl_to_cdmx("BIKE"))).await;

        let request = Request::delete("/api/v1/routes/stats?olderThanDays=1")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&state, request).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "deleted": 0 }));

        let request = Request::delete("/api/v1/routes/stats?olderThanDays=0")
            .body(Body::empty())
            .unwrap();
        let (_, body) = send(&state, request).await;
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "deleted": 1 }));
    }

    #[tokio::test]
    async fn purge_rejects_age_beyond_calendar() {
        let state = test_state();
        send(&state, plan_request(gdl_to_cdmx("CAR"))).await;
        let request = Request::delete("/api/v1/routes/stats?olderThanDays=4000000000")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(&state, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "olderThanDays out of range: 4000000000");
        assert_eq!(state.routes.planner().stats().count().await, Ok(1));
    }

    #[tokio::test]
    async fn purge_requires_age() {
        let state = test_state();
        let request = Request::delete("/api/v1/routes/stats")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(&state, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], 400);
    }

    #[test]
    fn plan_errors_map_to_status() {
        let err = AppError::from(PlanError::UnsupportedMode {
            mode: "PLANE".into(),
        });
        assert!(matches!(err, AppError::BadRequest { .. }));

        let err = AppError::from(PlanError::Persistence(
            crate::store::StoreError::Unavailable("down".into()),
        ));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
