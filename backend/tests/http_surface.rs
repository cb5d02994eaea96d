//! End-to-end coverage of the composed HTTP surface over in-memory ports.
//!
//! These tests exercise the real route wiring, extractor configuration, and
//! error envelopes with deterministic repositories substituted for
//! PostgreSQL.

use std::sync::Arc;

use actix_web::{App, http::StatusCode, test as actix_test, web};
use serde_json::{Value, json};
use uuid::Uuid;

use backend::domain::{DisciplineEntry, ProgramVersionDetail};
use backend::inbound::http::health::HealthState;
use backend::inbound::http::{configure_routes, state::HttpState};
use backend::test_support::{InMemoryCurriculum, InMemoryUsers, StubFailure, sample_user};

fn test_app(
    users: InMemoryUsers,
    curriculum: InMemoryCurriculum,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = web::Data::new(HttpState::new(Arc::new(users), Arc::new(curriculum)));
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    App::new().configure(|cfg| configure_routes(cfg, state, health))
}

async fn init_app(
    users: InMemoryUsers,
    curriculum: InMemoryCurriculum,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    actix_test::init_service(test_app(users, curriculum)).await
}

async fn body_json(response: actix_web::dev::ServiceResponse) -> Value {
    let bytes = actix_test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("JSON body")
}

#[actix_web::test]
async fn user_lifecycle_get_delete_then_404() {
    let user = sample_user("alice", "a@x.com");
    let id = *user.id.as_uuid();
    let app = init_app(
        InMemoryUsers::with_users(vec![user]),
        InMemoryCurriculum::default(),
    )
    .await;

    // Read the seeded user.
    let get = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/editUser/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(get.status(), StatusCode::OK);
    let dto = body_json(get).await;
    assert_eq!(dto.get("login").and_then(Value::as_str), Some("alice"));
    assert_eq!(dto.get("email").and_then(Value::as_str), Some("a@x.com"));

    // Delete it.
    let delete = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/delete/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(delete.status(), StatusCode::OK);

    // The same read now misses.
    let again = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/editUser/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
    let body = body_json(again).await;
    assert_eq!(
        body.get("Message").and_then(Value::as_str),
        Some("User not found")
    );
}

#[actix_web::test]
async fn update_then_get_reflects_new_fields_but_not_role() {
    let mut user = sample_user("alice", "a@x.com");
    user.role_id = 7;
    let id = *user.id.as_uuid();
    let store = InMemoryUsers::with_users(vec![user]);
    let app = init_app(store.clone(), InMemoryCurriculum::default()).await;

    let update = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/editUser")
            .set_json(json!({
                "userId": id,
                "login": "alice2",
                "firstName": "Alicia",
                "middleName": "May",
                "email": "alice2@x.com",
                "createdDate": "2021-03-15",
                "roleId": 1
            }))
            .to_request(),
    )
    .await;
    assert_eq!(update.status(), StatusCode::OK);

    let get = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/editUser/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(get.status(), StatusCode::OK);
    let dto = body_json(get).await;
    assert_eq!(dto.get("login").and_then(Value::as_str), Some("alice2"));
    assert_eq!(dto.get("firstName").and_then(Value::as_str), Some("Alicia"));
    assert_eq!(
        dto.get("createdDate").and_then(Value::as_str),
        Some("2021-03-15")
    );

    // The role survives the update attempt; the raw listing proves it.
    let raw = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/Roadmap").to_request(),
    )
    .await;
    let listed = body_json(raw).await;
    assert_eq!(listed[0].get("roleId").and_then(Value::as_i64), Some(7));
}

#[actix_web::test]
async fn empty_store_policies_differ_between_listings() {
    let app = init_app(InMemoryUsers::default(), InMemoryCurriculum::default()).await;

    let users = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/usersList").to_request(),
    )
    .await;
    assert_eq!(users.status(), StatusCode::NOT_FOUND);

    let versions = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/GetProgramVersions")
            .to_request(),
    )
    .await;
    assert_eq!(versions.status(), StatusCode::OK);
    assert_eq!(body_json(versions).await, json!([]));
}

#[actix_web::test]
async fn program_version_detail_round_trips_the_discipline_chain() {
    let version_id = Uuid::new_v4();
    let detail = ProgramVersionDetail {
        program_code: "09.03.04".into(),
        program_name: "Software Engineering".into(),
        description: Some("Applied software curriculum".into()),
        disciplines: vec![
            DisciplineEntry {
                id: Uuid::new_v4(),
                name: "Algebra".into(),
                semester: 1,
                description: None,
            },
            DisciplineEntry {
                id: Uuid::new_v4(),
                name: "Operating Systems".into(),
                semester: 4,
                description: Some("Processes and scheduling".into()),
            },
        ],
    };
    let app = init_app(
        InMemoryUsers::default(),
        InMemoryCurriculum::with_detail(version_id, detail),
    )
    .await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/program-version/{version_id}"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body.get("programCode").and_then(Value::as_str),
        Some("09.03.04")
    );
    let disciplines = body["disciplines"].as_array().expect("disciplines array");
    assert_eq!(disciplines.len(), 2);
    assert_eq!(
        disciplines[1].get("disciplineName").and_then(Value::as_str),
        Some("Operating Systems")
    );
}

#[actix_web::test]
async fn curriculum_failures_surface_as_redacted_500s() {
    let curriculum = InMemoryCurriculum::default();
    curriculum.fail_next(StubFailure::Connection);
    let app = init_app(InMemoryUsers::default(), curriculum.clone()).await;

    let listing = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/GetProgramVersions")
            .to_request(),
    )
    .await;
    assert_eq!(listing.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(listing)
            .await
            .get("Message")
            .and_then(Value::as_str),
        Some("An error occurred while processing your request.")
    );

    curriculum.fail_next(StubFailure::Connection);
    let detail = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/program-version/{}", Uuid::new_v4()))
            .to_request(),
    )
    .await;
    assert_eq!(detail.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(detail)
            .await
            .get("Message")
            .and_then(Value::as_str),
        Some("An error occurred while processing your request.")
    );
}

#[actix_web::test]
async fn health_probes_respond_once_ready() {
    let app = init_app(InMemoryUsers::default(), InMemoryCurriculum::default()).await;

    for path in ["/health/live", "/health/ready"] {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(path).to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "probe {path}");
    }
}
