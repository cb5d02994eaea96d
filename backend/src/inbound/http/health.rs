//! Health endpoints: liveness and readiness probes for orchestration.

use actix_web::{HttpResponse, get, http::header, web};
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared health state tracking readiness and liveness flags.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready once dependencies are initialised.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe: 200 once the server can handle traffic, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is still starting up")
    ),
    operation_id = "healthReady"
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe: 200 while the process should be kept running.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is alive"),
        (status = 503, description = "Process is shutting down")
    ),
    operation_id = "healthLive"
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test};

    #[actix_web::test]
    async fn ready_reports_503_until_marked() {
        let state = web::Data::new(HealthState::new());
        let app =
            actix_test::init_service(App::new().app_data(state.clone()).service(ready)).await;

        let before = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/ready")
                .to_request(),
        )
        .await;
        assert_eq!(before.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.mark_ready();
        let after = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/ready")
                .to_request(),
        )
        .await;
        assert_eq!(after.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn live_reports_ok_until_marked_unhealthy() {
        let state = web::Data::new(HealthState::new());
        let app =
            actix_test::init_service(App::new().app_data(state.clone()).service(live)).await;

        let healthy = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/live")
                .to_request(),
        )
        .await;
        assert_eq!(healthy.status(), StatusCode::OK);

        state.mark_unhealthy();
        let draining = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/live")
                .to_request(),
        )
        .await;
        assert_eq!(draining.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
