use std::sync::Arc;

use api::AppState;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use domain::{
    hospitals::Hospital,
    orders::{cqrs, Services},
    seed::seed_reference_data,
    store::{DocumentStore, MemoryStore},
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> Router {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
    seed_reference_data(store.as_ref()).await.unwrap();
    let commands = cqrs::init_in_memory(cqrs::init_repo(store.clone()), Services::default());

    api::router(AppState::new(store, commands), &["*".to_string()])
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map_or_else(Body::empty, |body| Body::from(body.to_string())))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

#[tokio::test]
async fn root_answers_with_and_without_trailing_slash() {
    let app = app().await;

    for uri in ["/api", "/api/"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "Hospot API - Find & Book Hospital Beds in Real Time"
        );
    }
}

#[tokio::test]
async fn hospitals_are_ranked_by_free_beds_then_rating() {
    let app = app().await;

    let (status, body) = get(&app, "/api/hospitals").await;
    assert_eq!(status, StatusCode::OK);

    let hospitals: Vec<Hospital> = serde_json::from_value(body).unwrap();
    let totals: Vec<u32> = hospitals.iter().map(Hospital::total_beds).collect();
    assert_eq!(totals, vec![95, 80, 72, 48, 38, 26, 15]);
    assert_eq!(hospitals[0].rating, 4.9);
    assert!(hospitals[6].name.starts_with("Sunset"));
}

#[tokio::test]
async fn hospital_search_is_a_case_insensitive_substring() {
    let app = app().await;

    let (status, body) = get(&app, "/api/hospitals?search=GENERAL").await;
    assert_eq!(status, StatusCode::OK);

    let hospitals: Vec<Hospital> = serde_json::from_value(body).unwrap();
    assert!(!hospitals.is_empty());
    assert!(hospitals.iter().all(|h| {
        [&h.name, &h.location, &h.address]
            .iter()
            .any(|field| field.to_lowercase().contains("general"))
    }));

    let (_, body) = get(&app, "/api/hospitals?search=zzz-no-such-place").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn unknown_hospital_is_404_with_detail() {
    let app = app().await;

    let (status, body) = get(&app, "/api/hospitals/north-hills-medical").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "north-hills-medical");

    let (status, body) = get(&app, "/api/hospitals/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Entity not found: Hospital");
}

#[tokio::test]
async fn medicine_filters_combine_and_bad_category_is_400() {
    let app = app().await;

    let (status, body) = get(
        &app,
        "/api/medicines?category=antibiotics&prescription_required=true",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let medicines = body.as_array().unwrap();
    assert!(!medicines.is_empty());
    assert!(medicines
        .iter()
        .all(|m| m["category"] == "antibiotics" && m["prescriptionRequired"] == true));

    let (status, body) = get(&app, "/api/medicines?category=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 14);

    let (status, body) = get(&app, "/api/medicines?category=potions").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("category"));
}

#[tokio::test]
async fn prescription_required_flag_must_be_a_boolean() {
    let app = app().await;

    let (status, body) = get(&app, "/api/medicines?prescription_required=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("prescription_required"));

    let (status, body) = get(&app, "/api/medicines?prescription_required=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 14);

    let (status, body) = get(&app, "/api/medicines?prescription_required=false").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|m| m["prescriptionRequired"] == false));
}

#[tokio::test]
async fn malformed_requests_are_400_with_json_detail() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({ "userId": "ana", "items": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/cart/ana/add")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["detail"].is_string());

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/cart/ana/update?medicine_id=paracetamol-500&quantity=abc",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn prescriptions_are_created_and_listed_per_user() {
    let app = app().await;
    let prescription = json!({
        "userId": "ana",
        "doctorName": "Dr. Rivera",
        "hospitalName": "City General Hospital",
        "prescriptionDate": "2024-01-15T10:00:00Z",
        "medicines": [
            { "medicineName": "Amoxicillin 500mg", "dosage": "500mg", "duration": "7 days" }
        ]
    });

    let (status, created) =
        send(&app, Method::POST, "/api/prescriptions", Some(prescription.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["isUsed"], false);

    let mut future = prescription;
    future["prescriptionDate"] = json!("2999-01-01T00:00:00Z");
    let (status, _) = send(&app, Method::POST, "/api/prescriptions", Some(future)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, listed) = get(&app, "/api/prescriptions/user/ana").await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let uri = format!("/api/prescriptions/{}", created["id"].as_str().unwrap());
    let (status, fetched) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn cart_rejects_prescription_medicine_and_missing_lines() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart/ana/add",
        Some(json!({ "medicineId": "amoxicillin-500" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("prescriptionId"));

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/api/cart/ana/remove/paracetamol-500",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn checkout_flow() {
    let app = app().await;

    let (status, cart) = send(
        &app,
        Method::POST,
        "/api/cart/ana/add",
        Some(json!({ "medicineId": "paracetamol-500", "quantity": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["totalAmount"], 9.98);

    let (status, cart) = send(
        &app,
        Method::PUT,
        "/api/cart/ana/update?medicine_id=paracetamol-500&quantity=3",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["items"][0]["quantity"], 3);

    let (status, order) = send(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({
            "userId": "ana",
            "items": cart["items"],
            "deliveryAddress": "12 Elm St",
            "contactNumber": "+1-555-0199"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["status"], "pending");
    assert_eq!(order["paymentMethod"], "cash_on_delivery");
    assert_eq!(order["totalAmount"], 20.96);

    let (_, cart) = get(&app, "/api/cart/ana").await;
    assert_eq!(cart["items"], json!([]));

    let (_, medicine) = get(&app, "/api/medicines/paracetamol-500").await;
    assert_eq!(medicine["stock"], 197);

    let status_uri = format!("/api/orders/{}/status", order["id"].as_str().unwrap());

    let (status, confirmed) = send(
        &app,
        Method::PUT,
        &status_uri,
        Some(json!({ "status": "confirmed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(confirmed["status"], "confirmed");

    let (status, body) = send(
        &app,
        Method::PUT,
        &status_uri,
        Some(json!({ "status": "delivered" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["detail"],
        "Invalid state transition from confirmed to delivered"
    );

    let (status, cancelled) = send(
        &app,
        Method::PUT,
        &status_uri,
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["status"], "cancelled");

    let (_, orders) = get(&app, "/api/orders/user/ana").await;
    assert_eq!(orders.as_array().unwrap().len(), 1);

    let (status, _) = get(&app, "/api/orders/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let app = app().await;

    let request = Request::builder()
        .uri("/api/hospitals")
        .header(header::ORIGIN, "https://hospot.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
