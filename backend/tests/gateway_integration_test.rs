//! Integration tests for the analysis gateway against a mock AI service

mod common;

use common::{closed_port_url, gateway_for, sample_entries, sample_profile, test_config, TEST_TIMEOUT};
use healthsync_backend::error::AnalysisError;
use healthsync_backend::services::{AnalysisGateway, FailureKind};
use healthsync_shared::{compute_fallback, Priority, RecommendationCategory};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_remote_result_returned_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "healthScore": 67,
            "recommendations": [
                {
                    "category": "nutrition",
                    "priority": "medium",
                    "suggestion": "Focus on balanced nutrition with whole foods."
                },
                {
                    "category": "sleep",
                    "priority": "high",
                    "suggestion": "Aim for 8 hours of sleep."
                }
            ],
            "insights": "There's room for improvement."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = gateway_for(&server)
        .get_analysis(&sample_entries(), &sample_profile())
        .await
        .unwrap();

    assert_eq!(result.health_score, 67);
    assert_eq!(result.recommendations.len(), 2);
    // Remote ordering is preserved, not re-sorted by priority
    assert_eq!(result.recommendations[0].category, RecommendationCategory::Nutrition);
    assert_eq!(result.recommendations[1].priority, Priority::High);
    assert_eq!(result.insights, "There's room for improvement.");
}

#[tokio::test]
async fn test_unlisted_category_and_priority_returned_unchanged() {
    let body = json!({
        "healthScore": 70,
        "recommendations": [
            {
                "category": "stress",
                "priority": "urgent",
                "suggestion": "Schedule short breaks during the workday."
            }
        ],
        "insights": "Stress levels look elevated."
    });
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let result = gateway_for(&server)
        .get_analysis(&sample_entries(), &sample_profile())
        .await
        .unwrap();

    assert_eq!(
        result.recommendations[0].category,
        RecommendationCategory::Other("stress".to_string())
    );
    assert_eq!(result.recommendations[0].priority, Priority::Other("urgent".to_string()));
    assert_eq!(serde_json::to_value(&result).unwrap(), body);
}

#[tokio::test]
async fn test_request_carries_health_data_and_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_partial_json(json!({
            "healthData": [
                { "date": "2024-03-01", "steps": 11000, "sleepHours": 8.0, "mood": "good" },
                { "date": "2024-03-02" },
                { "date": "2024-03-03", "waterIntake": 1.0, "mood": "bad" }
            ],
            "userProfile": { "age": 29, "gender": "male", "height": 180.0, "weight": 78.5 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "healthScore": 55,
            "recommendations": [],
            "insights": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = gateway_for(&server)
        .get_analysis(&sample_entries(), &sample_profile())
        .await
        .unwrap();

    assert_eq!(result.health_score, 55);
}

#[tokio::test]
async fn test_server_error_propagates_without_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
        .expect(1)
        .mount(&server)
        .await;

    let err = gateway_for(&server)
        .get_analysis(&sample_entries(), &sample_profile())
        .await
        .unwrap_err();

    match err {
        AnalysisError::Remote(failure) => {
            assert_eq!(failure.kind, FailureKind::Other);
            assert_eq!(failure.status, Some(500));
            assert!(failure.message.contains("model crashed"));
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_error_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "detail": "invalid mood" })))
        .expect(1)
        .mount(&server)
        .await;

    let err = gateway_for(&server)
        .get_analysis(&sample_entries(), &sample_profile())
        .await
        .unwrap_err();

    assert_eq!(err.remote_status(), Some(422));
}

#[tokio::test]
async fn test_malformed_body_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = gateway_for(&server)
        .get_analysis(&sample_entries(), &sample_profile())
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Remote(ref f) if f.kind == FailureKind::Other));
}

#[tokio::test]
async fn test_connection_refused_falls_back() {
    let config = test_config(&closed_port_url(), TEST_TIMEOUT);
    let gateway = AnalysisGateway::from_config(&config).unwrap();

    let result = gateway
        .get_analysis(&sample_entries(), &sample_profile())
        .await
        .unwrap();

    assert_eq!(result, compute_fallback(&sample_entries()));
    // Latest day: 2000 steps (5) + 5h sleep (10) + 1L water (10) + bad mood (10)
    assert_eq!(result.health_score, 35);
    assert_eq!(
        result
            .recommendations
            .iter()
            .map(|r| r.category.clone())
            .collect::<Vec<_>>(),
        vec![
            RecommendationCategory::Exercise,
            RecommendationCategory::Sleep,
            RecommendationCategory::Hydration,
        ]
    );
}

#[tokio::test]
async fn test_blocking_service_falls_back_within_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "healthScore": 99, "recommendations": [], "insights": "late" }))
                .set_delay(Duration::from_secs(60)),
        )
        .mount(&server)
        .await;

    let started = Instant::now();
    let result = gateway_for(&server)
        .get_analysis(&sample_entries(), &sample_profile())
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(result, compute_fallback(&sample_entries()));
    assert!(elapsed >= TEST_TIMEOUT, "returned before the timeout: {elapsed:?}");
    assert!(elapsed < TEST_TIMEOUT + Duration::from_secs(2), "hung for {elapsed:?}");
}
