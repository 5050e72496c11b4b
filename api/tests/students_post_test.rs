mod helpers;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use db::models::Student;
use helpers::app::{get_json_body, make_test_app};
use helpers::photos::spawn_photo_server;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_student(app: &Router, body: &Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/student")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn valid_student(base_url: &str) -> Value {
    json!({
        "data": {
            "matricula": "20231bsi012",
            "name": " ana  clara e silva ",
            "photo": format!("{base_url}/photo.jpg"),
            "attendance": 0
        }
    })
}

/// Test Case: Successful registration canonicalizes the record
#[tokio::test]
async fn test_register_student_normalizes_and_stores_the_photo() {
    let (app, app_state) = make_test_app().await;
    let base_url = spawn_photo_server().await;

    let response = post_student(&app, &valid_student(&base_url)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Student 20231BSI012 registered successfully");
    assert_eq!(json["data"]["matricula"], "20231BSI012");
    assert_eq!(json["data"]["name"], "Ana Clara E Silva");
    assert_eq!(json["data"]["attendance"], 0);
    // base64 of a JPEG signature always starts with this prefix
    assert!(json["data"]["photo"].as_str().unwrap().starts_with("/9j/4"));

    let stored = Student::find()
        .one(app_state.db())
        .await
        .unwrap()
        .expect("student should be stored");
    assert_eq!(stored.matricula, "20231BSI012");
    assert_eq!(stored.name, "Ana Clara E Silva");
}

#[tokio::test]
async fn test_register_student_accepts_png_photos() {
    let (app, _) = make_test_app().await;
    let base_url = spawn_photo_server().await;

    let mut body = valid_student(&base_url);
    body["data"]["photo"] = json!(format!("{base_url}/photo.png"));

    let response = post_student(&app, &body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert!(json["data"]["photo"].as_str().unwrap().starts_with('i'));
}

/// Test Case: Body without the data wrapper
#[tokio::test]
async fn test_register_without_data_is_unprocessable() {
    let (app, app_state) = make_test_app().await;

    let response = post_student(&app, &json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Missing some fields.");

    let count = Student::find().count(app_state.db()).await.unwrap();
    assert_eq!(count, 0);
}

/// Test Case: Each absent field yields its own issue
#[tokio::test]
async fn test_register_reports_each_missing_field() {
    let (app, _) = make_test_app().await;

    let response = post_student(&app, &json!({ "data": { "name": "ana clara" } })).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = get_json_body(response).await;
    let issues = json["errors"].as_array().unwrap();
    let fields: Vec<&str> = issues
        .iter()
        .map(|issue| issue["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["attendance", "matricula", "photo"]);
    assert_eq!(
        issues[1]["message"],
        "Field matricula must compose request body."
    );
}

#[tokio::test]
async fn test_register_rejects_malformed_matriculas() {
    let (app, app_state) = make_test_app().await;
    let base_url = spawn_photo_server().await;

    let mut body = valid_student(&base_url);
    body["data"]["matricula"] = json!("20231BSI0");
    let response = post_student(&app, &body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = get_json_body(response).await;
    assert_eq!(
        json["errors"][0]["message"],
        "Field matricula must be 11 characters long."
    );

    let mut body = valid_student(&base_url);
    body["data"]["matricula"] = json!("20231XYZ012");
    let response = post_student(&app, &body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = get_json_body(response).await;
    assert_eq!(
        json["errors"][0]["message"],
        "Field matricula must match UFU's pattern for Information System students."
    );

    let count = Student::find().count(app_state.db()).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_register_rejects_an_empty_name() {
    let (app, _) = make_test_app().await;
    let base_url = spawn_photo_server().await;

    let mut body = valid_student(&base_url);
    body["data"]["name"] = json!("");
    let response = post_student(&app, &body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = get_json_body(response).await;
    assert_eq!(json["errors"][0]["message"], "Field name must not be empty.");
}

#[tokio::test]
async fn test_register_rejects_a_non_url_photo() {
    let (app, _) = make_test_app().await;
    let base_url = spawn_photo_server().await;

    let mut body = valid_student(&base_url);
    body["data"]["photo"] = json!("not-a-url");
    let response = post_student(&app, &body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = get_json_body(response).await;
    assert_eq!(
        json["errors"][0]["message"],
        "Field photo must be filled with valid url."
    );
}

/// Test Case: Duplicate matricula, regardless of case
#[tokio::test]
async fn test_register_rejects_duplicate_matriculas() {
    let (app, app_state) = make_test_app().await;
    let base_url = spawn_photo_server().await;

    let response = post_student(&app, &valid_student(&base_url)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut duplicate = valid_student(&base_url);
    duplicate["data"]["matricula"] = json!("20231BSI012");
    duplicate["data"]["name"] = json!("outro nome");
    let response = post_student(&app, &duplicate).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("Já Cadastrado"));

    // the original record is untouched
    let stored = Student::find().all(app_state.db()).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "Ana Clara E Silva");
}

#[tokio::test]
async fn test_register_rejects_bytes_that_are_not_an_image() {
    let (app, app_state) = make_test_app().await;
    let base_url = spawn_photo_server().await;

    let mut body = valid_student(&base_url);
    body["data"]["photo"] = json!(format!("{base_url}/notes.txt"));
    let response = post_student(&app, &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Unsupported image extension.");

    let count = Student::find().count(app_state.db()).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_register_reports_an_unreachable_photo() {
    let (app, app_state) = make_test_app().await;
    let base_url = spawn_photo_server().await;

    let mut body = valid_student(&base_url);
    body["data"]["photo"] = json!(format!("{base_url}/gone.jpg"));
    let response = post_student(&app, &body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert!(json["message"]
        .as_str()
        .unwrap()
        .starts_with("failed to retrieve photo"));

    let count = Student::find().count(app_state.db()).await.unwrap();
    assert_eq!(count, 0);
}
