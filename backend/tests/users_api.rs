//! End-to-end tests for the users resource through the assembled app.
//!
//! Requests run through the CORS and tracing middleware, the `/users` scope,
//! and the in-memory store, the same stack the server binary mounts.

use std::sync::Arc;

use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
};
use actix_web::http::{Method, StatusCode};
use actix_web::{App, test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use users_api::Trace;
use users_api::domain::{TRACE_ID_HEADER, TraceId};
use users_api::inbound::http::{HttpState, users_scope};
use users_api::middleware::cors;
use users_api::outbound::memory::InMemoryUserStore;

#[fixture]
fn store() -> Arc<InMemoryUserStore> {
    Arc::new(InMemoryUserStore::new())
}

fn users_app(
    store: Arc<InMemoryUserStore>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(store)))
        .wrap(cors())
        .wrap(Trace)
        .service(users_scope())
}

fn create(payload: Value) -> test::TestRequest {
    test::TestRequest::post().uri("/users").set_json(payload)
}

fn list() -> test::TestRequest {
    test::TestRequest::get().uri("/users")
}

fn violations(body: &Value) -> Vec<(String, String, String)> {
    body.get("error")
        .and_then(Value::as_array)
        .expect("error array")
        .iter()
        .map(|violation| {
            let text = |key: &str| {
                violation
                    .get(key)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned()
            };
            (text("field"), text("code"), text("message"))
        })
        .collect()
}

#[rstest]
#[actix_web::test]
async fn valid_user_is_created_then_listed(store: Arc<InMemoryUserStore>) {
    let app = test::init_service(users_app(store)).await;

    let created =
        test::call_service(&app, create(json!({"name": "Alice", "email": "a@b.com"})).to_request())
            .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(created).await;
    assert_eq!(
        body,
        json!({
            "message": "User created successfully",
            "user": {"name": "Alice", "email": "a@b.com"}
        })
    );

    let listed = test::call_service(&app, list().to_request()).await;
    assert_eq!(listed.status(), StatusCode::OK);
    let body: Value = test::read_body_json(listed).await;
    assert_eq!(body, json!([{"name": "Alice", "email": "a@b.com"}]));
}

#[rstest]
#[actix_web::test]
async fn short_name_is_rejected_and_not_stored(store: Arc<InMemoryUserStore>) {
    let app = test::init_service(users_app(store.clone())).await;

    let response =
        test::call_service(&app, create(json!({"name": "Al", "email": "a@b.com"})).to_request())
            .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        violations(&body),
        vec![(
            "name".to_owned(),
            "too_short".to_owned(),
            "name must be at least 3 characters".to_owned()
        )]
    );

    let listed: Value =
        test::read_body_json(test::call_service(&app, list().to_request()).await).await;
    assert_eq!(listed, json!([]));
    assert!(store.is_empty());
}

#[rstest]
#[actix_web::test]
async fn invalid_email_is_rejected(store: Arc<InMemoryUserStore>) {
    let app = test::init_service(users_app(store.clone())).await;

    let response = test::call_service(
        &app,
        create(json!({"name": "Alice", "email": "not-an-email"})).to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        violations(&body),
        vec![(
            "email".to_owned(),
            "invalid_email".to_owned(),
            "invalid email format".to_owned()
        )]
    );
    assert!(store.is_empty());
}

#[rstest]
#[actix_web::test]
async fn every_violation_is_reported(store: Arc<InMemoryUserStore>) {
    let app = test::init_service(users_app(store)).await;

    let response = test::call_service(&app, create(json!({})).to_request()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    let fields: Vec<_> = violations(&body)
        .into_iter()
        .map(|(field, code, _)| (field, code))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("name".to_owned(), "required".to_owned()),
            ("email".to_owned(), "required".to_owned()),
        ]
    );
}

#[rstest]
#[actix_web::test]
async fn list_preserves_insertion_order_and_duplicates(store: Arc<InMemoryUserStore>) {
    let app = test::init_service(users_app(store)).await;
    let users = [
        json!({"name": "Alice", "email": "a@b.com"}),
        json!({"name": "Bob", "email": "bob@example.org"}),
        json!({"name": "Alice", "email": "a@b.com"}),
    ];
    for user in &users {
        let response = test::call_service(&app, create(user.clone()).to_request()).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let first: Value =
        test::read_body_json(test::call_service(&app, list().to_request()).await).await;
    let second: Value =
        test::read_body_json(test::call_service(&app, list().to_request()).await).await;

    assert_eq!(first, Value::Array(users.to_vec()));
    assert_eq!(first, second, "listing must not change the store");
}

#[rstest]
#[actix_web::test]
async fn extra_fields_are_dropped(store: Arc<InMemoryUserStore>) {
    let app = test::init_service(users_app(store)).await;

    let response = test::call_service(
        &app,
        create(json!({"name": "Alice", "email": "a@b.com", "admin": true})).to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(
        body.get("user"),
        Some(&json!({"name": "Alice", "email": "a@b.com"}))
    );
}

#[rstest]
#[case::created(create(json!({"name": "Alice", "email": "a@b.com"})), StatusCode::CREATED)]
#[case::rejected(create(json!({"name": "Al", "email": "a@b.com"})), StatusCode::BAD_REQUEST)]
#[case::listed(list(), StatusCode::OK)]
#[actix_web::test]
async fn every_response_carries_a_trace_id(
    store: Arc<InMemoryUserStore>,
    #[case] request: test::TestRequest,
    #[case] status: StatusCode,
) {
    let app = test::init_service(users_app(store)).await;

    let response = test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), status);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header")
        .to_str()
        .expect("header is ascii");
    assert!(header.parse::<TraceId>().is_ok(), "trace id should be a UUID");
}

fn allow_origin(response: &ServiceResponse<EitherBody<BoxBody>>) -> Option<&str> {
    response
        .headers()
        .get(ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|value| value.to_str().ok())
}

#[rstest]
#[case("/users")]
#[case("/users/")]
#[actix_web::test]
async fn browser_preflight_is_allowed(store: Arc<InMemoryUserStore>, #[case] uri: &str) {
    let app = test::init_service(users_app(store.clone())).await;

    let response = test::call_service(
        &app,
        test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri(uri)
            .insert_header((ORIGIN, "http://localhost:5173"))
            .insert_header((ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request(),
    )
    .await;

    assert!(
        response.status().is_success(),
        "preflight got {}",
        response.status()
    );
    assert_eq!(allow_origin(&response), Some("*"));
    assert!(store.is_empty(), "preflight must not create users");
}

#[rstest]
#[actix_web::test]
async fn cross_origin_create_and_list_are_allowed(store: Arc<InMemoryUserStore>) {
    let app = test::init_service(users_app(store)).await;

    let created = test::call_service(
        &app,
        create(json!({"name": "Alice", "email": "a@b.com"}))
            .insert_header((ORIGIN, "http://localhost:5173"))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(allow_origin(&created), Some("*"));

    let listed = test::call_service(
        &app,
        list()
            .insert_header((ORIGIN, "http://localhost:5173"))
            .to_request(),
    )
    .await;
    assert_eq!(listed.status(), StatusCode::OK);
    assert_eq!(allow_origin(&listed), Some("*"));
}
