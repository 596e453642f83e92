mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use flight_service::api::handlers::health_handler;

fn make_server(flights: Vec<flight_service::domain::entities::Flight>) -> TestServer {
    let (state, _repo) = common::create_test_state(flights);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = make_server(vec![
        common::test_flight(1, "VIE", "LHR"),
        common::test_flight(2, "LHR", "JFK"),
    ]);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["flights"], 2);
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "2 flights stored");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = make_server(vec![]);

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert_eq!(json["flights"], 0);
    assert!(json["checks"].get("store").is_some());
}
