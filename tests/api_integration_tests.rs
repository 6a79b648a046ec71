// API integration tests
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use carbon_estimator::{create_router, AppState, CalculationStore, FootprintEstimator};
    use serde_json::{json, Value};
    use tower::ServiceExt; // for oneshot

    fn app_with_store() -> axum::Router {
        let store = CalculationStore::open_in_memory().unwrap();
        create_router(AppState::from_parts(FootprintEstimator::offline(), Some(store)))
    }

    fn app_without_store(strict: bool) -> axum::Router {
        let estimator = FootprintEstimator::offline().with_strict_validation(strict);
        create_router(AppState::from_parts(estimator, None))
    }

    fn questionnaire() -> Value {
        json!({
            "flights_short": 2,
            "flights_long": 1,
            "transport_type": "Car (Petrol)",
            "daily_distance": 20.0,
            "meat_frequency": "1-2 times per week",
            "dairy_frequency": "Sometimes",
            "clothing_spend": 50.0,
            "online_shopping": 100.0,
            "home_type": "Medium House",
            "heating_type": "Gas Boiler"
        })
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    // =========================================================================
    // Health and estimation
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = app_without_store(false).oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_response(response).await;
        assert_eq!(json["status"], "healthy");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_estimate_footprint() {
        let response = app_without_store(false)
            .oneshot(post_json("/api/footprint", &questionnaire()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_response(response).await;
        assert_eq!(json["result"]["total_emissions"], 41.01);
        assert_eq!(json["result"]["breakdown"]["shopping"], 33.0);
        assert_eq!(json["insights"]["shopping"]["level"], "Very High");
        assert_eq!(json["recommendations"].as_array().unwrap().len(), 3);
        assert_eq!(json["advice_source"], "fallback");
        assert!(json["calculation_id"].is_null());
    }

    #[tokio::test]
    async fn test_strict_validation_rejects_unknown_label() {
        let mut body = questionnaire();
        body["heating_type"] = json!("Nuclear");

        let response = app_without_store(true)
            .oneshot(post_json("/api/footprint", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_response(response).await;
        assert!(json["error"].as_str().unwrap().contains("heating_type"));
    }

    #[tokio::test]
    async fn test_lenient_mode_accepts_unknown_label() {
        let mut body = questionnaire();
        body["heating_type"] = json!("Nuclear");

        let response = app_without_store(false)
            .oneshot(post_json("/api/footprint", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_classify_breakdown() {
        let body = json!({
            "breakdown": {"travel": 0.0, "transport": 0.0, "diet": 0.0, "shopping": 0.0, "home_energy": 0.0},
            "total_emissions": 0.0
        });

        let response = app_without_store(false)
            .oneshot(post_json("/api/footprint/insights", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_response(response).await;
        assert_eq!(json["diet"]["percentage"], 0.0);
        assert_eq!(json["diet"]["level"], "Very Low");
    }

    #[tokio::test]
    async fn test_classify_breakdown_rounds_percentage() {
        let body = json!({
            "breakdown": {"travel": 2.10, "transport": 1.31, "diet": 1.10, "shopping": 33.0, "home_energy": 3.50},
            "total_emissions": 41.01
        });

        let response = app_without_store(false)
            .oneshot(post_json("/api/footprint/insights", &body))
            .await
            .unwrap();

        let json = json_response(response).await;
        assert_eq!(json["shopping"]["percentage"], 80.5);
        assert_eq!(json["shopping"]["level"], "Very High");
    }

    // =========================================================================
    // History
    // =========================================================================

    #[tokio::test]
    async fn test_history_round_trip() {
        let app = app_with_store();

        let mut body = questionnaire();
        body["user_id"] = json!("user-42");
        let response = app.clone().oneshot(post_json("/api/footprint", &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_response(response).await;
        assert!(json["calculation_id"].is_i64());

        let response = app.clone().oneshot(get("/api/history/user-42?limit=5")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_response(response).await;
        assert_eq!(json["calculations"].as_array().unwrap().len(), 1);
        assert_eq!(json["calculations"][0]["total_emissions"], 41.01);

        let response = app.clone().oneshot(get("/api/statistics")).await.unwrap();
        let json = json_response(response).await;
        assert_eq!(json["total_calculations"], 1);
        assert_eq!(json["average_emissions"], 41.01);

        let delete = Request::builder()
            .method("DELETE")
            .uri("/api/history/user-42")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(delete).await.unwrap();
        let json = json_response(response).await;
        assert_eq!(json["deleted"], true);

        let response = app.oneshot(get("/api/history/user-42")).await.unwrap();
        let json = json_response(response).await;
        assert!(json["calculations"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_history_unavailable_without_store() {
        let response = app_without_store(false)
            .oneshot(get("/api/statistics"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
