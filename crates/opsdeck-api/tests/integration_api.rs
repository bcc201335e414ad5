//! Integration tests for the Opsdeck API router
//!
//! These drive the full router in-process and assert on the JSON
//! payloads the dashboard pages consume.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use opsdeck_api::build_router;
use opsdeck_core::Config;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tower::ServiceExt;

fn test_router() -> Router {
    build_router(Config::default()).expect("router builds with default config")
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_root_endpoint_reports_service() {
    let app = test_router();
    let (status, json) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["service"], "Opsdeck Dashboard API");
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_health_and_readiness() {
    let app = test_router();

    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");

    let (status, json) = get_json(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["ready"], true);

    let (status, json) = get_json(&app, "/health/detailed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["datasets"]["seeded"], true);
    assert_eq!(json["datasets"]["customers"], 4);
    assert_eq!(json["live_feed"]["enabled"], false);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "ROUTE_NOT_FOUND");
}

#[tokio::test]
async fn test_customers_without_filters_returns_everything() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/customers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 4);
    assert_eq!(json["count"], 4);
    assert_eq!(json["customers"][0]["name"], "Tech Solutions Inc.");
    assert_eq!(json["customers"][0]["initials"], "TSI");
    assert_eq!(json["pagination"]["has_next"], false);
    assert_eq!(json["metrics"]["total_customers"], 1248);
}

#[tokio::test]
async fn test_customers_search_tech_matches_one_account() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/customers?search=tech&status=all").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["customers"][0]["name"], "Tech Solutions Inc.");
}

#[tokio::test]
async fn test_customers_status_filter_is_exact() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/customers?status=prospect").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["customers"][0]["name"], "Retail Chain Co.");
    assert_eq!(json["customers"][0]["status"], "prospect");
}

#[tokio::test]
async fn test_customers_unknown_status_is_rejected() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/customers?status=vip").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_PARAMETERS");
}

#[tokio::test]
async fn test_customers_pagination_window() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/customers?limit=2&offset=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 4);
    assert_eq!(json["count"], 2);
    assert_eq!(json["customers"][0]["name"], "Retail Chain Co.");
    assert_eq!(json["pagination"]["has_prev"], true);
    assert_eq!(json["pagination"]["has_next"], false);
}

#[tokio::test]
async fn test_customers_invalid_limit_is_rejected() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/customers?limit=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_PARAMETERS");
}

#[tokio::test]
async fn test_employees_search_covers_department_and_position() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/hr/employees?search=engineer").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 2);
    assert_eq!(json["employees"][0]["name"], "Sarah Johnson");
    assert_eq!(json["employees"][1]["name"], "David Kim");
    assert_eq!(
        json["departments"],
        serde_json::json!(["Engineering", "Marketing", "Sales", "HR"])
    );
}

#[tokio::test]
async fn test_hr_overview_derives_training_completion() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/hr").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["metrics"]["total_employees"], 247);

    let safety = &json["training_programs"][2];
    assert_eq!(safety["program"], "Safety Training");
    let completion = safety["completion_percent"].as_f64().unwrap();
    assert!((completion - 241.0 / 247.0 * 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_inventory_statuses_are_computed() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/inventory").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 4);
    assert_eq!(json["items"][0]["status"], "in-stock");
    assert_eq!(json["items"][1]["status"], "low-stock");
    assert_eq!(json["items"][2]["status"], "out-of-stock");
    assert_eq!(json["status_counts"]["low_stock"], 1);
    assert_eq!(json["status_counts"]["out_of_stock"], 1);
}

#[tokio::test]
async fn test_inventory_status_filter_uses_computed_status() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/inventory?status=low-stock").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["name"], "Office Chairs");
}

#[tokio::test]
async fn test_inventory_conjunctive_filters() {
    let app = test_router();
    let (status, json) =
        get_json(&app, "/api/inventory?search=wireless&category=Electronics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["name"], "Wireless Headphones");

    // Same search against a different category matches nothing
    let (status, json) = get_json(&app, "/api/inventory?search=wireless&category=Furniture").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 0);
}

#[tokio::test]
async fn test_operations_summary_averages_running_lines() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/operations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["running_lines"], 3);
    assert_eq!(json["summary"]["total_lines"], 4);
    assert_eq!(json["summary"]["total_output"], 1247 + 2134 + 1987);

    let average = json["summary"]["average_efficiency"].as_f64().unwrap();
    assert!((average - (94.2 + 87.5 + 96.8) / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_overview_metric_progress_is_uncapped() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/overview").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["kpis"].as_array().unwrap().len(), 4);

    let fulfillment = &json["operation_metrics"][2];
    assert_eq!(fulfillment["name"], "Order Fulfillment Time");
    let progress = fulfillment["progress_percent"].as_f64().unwrap();
    assert!((progress - 116.666_666_666_666_67).abs() < 1e-9);
}

#[tokio::test]
async fn test_financial_variances_are_derived() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/financial").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["kpis"]["net_profit"], 720_000);
    assert_eq!(json["budget_vs_actual"][0]["variance"], 200_000);
    assert_eq!(json["budget_vs_actual"][1]["variance"], -50_000);
}

#[tokio::test]
async fn test_reports_category_filter() {
    let app = test_router();
    let (status, json) = get_json(&app, "/api/reports?category=HR").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["templates"][0]["name"], "Employee Performance Review");

    let (_, unfiltered) = get_json(&app, "/api/reports").await;
    assert_eq!(unfiltered["total"], 6);
}

#[tokio::test]
async fn test_analytics_and_settings_payloads() {
    let app = test_router();

    let (status, json) = get_json(&app, "/api/analytics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["realtime_metrics"]["active_users"], 1247);
    assert_eq!(json["conversion_funnel"][0]["stage"], "Website Visits");

    let (status, json) = get_json(&app, "/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["profile"]["role"], "Administrator");
    assert_eq!(json["integrations"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_live_toggle_round_trip() {
    let app = test_router();

    let (status, json) = get_json(&app, "/api/overview/live").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["enabled"], false);
    assert_eq!(json["snapshot"]["active_users"], 1247);

    let (status, json) = post_json(
        &app,
        "/api/overview/live",
        &serde_json::json!({"enabled": true}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["enabled"], true);

    // Enabling twice is a no-op, not an error
    let (status, json) = post_json(
        &app,
        "/api/overview/live",
        &serde_json::json!({"enabled": true}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["enabled"], true);

    let (status, json) = post_json(
        &app,
        "/api/overview/live",
        &serde_json::json!({"enabled": false}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["enabled"], false);

    let (_, json) = get_json(&app, "/api/overview/live").await;
    assert_eq!(json["enabled"], false);
}
