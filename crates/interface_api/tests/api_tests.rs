//! Router tests against a temporary snapshot directory

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use interface_api::{build_service, config::ApiConfig, create_router};
use test_utils::{IdentityFixtures, SAMPLE_SNAPSHOT};

fn app_with_data() -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("K-10001.json"), SAMPLE_SNAPSHOT).expect("write snapshot");
    std::fs::write(dir.path().join("K-BROKEN.json"), "{ not json").expect("write snapshot");

    let config = ApiConfig {
        data_dir: dir.path().to_path_buf(),
        ..ApiConfig::default()
    };
    let app = create_router(build_service(&config), config);
    (app, dir)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

// ============================================================================
// Health
// ============================================================================

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_is_always_ok() {
        let (app, _dir) = app_with_data();
        let (status, body) = send(app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ready_when_data_dir_exists() {
        let (app, _dir) = app_with_data();
        let (status, body) = send(app, get("/health/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["snapshot_source"]["status"], "healthy");
    }

    #[tokio::test]
    async fn test_not_ready_without_data_dir() {
        let config = ApiConfig {
            data_dir: "/nonexistent/analytics-data".into(),
            ..ApiConfig::default()
        };
        let app = create_router(build_service(&config), config);
        let (status, body) = send(app, get("/health/ready")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not_ready");
    }
}

// ============================================================================
// Customer Analytics
// ============================================================================

mod customer_analytics {
    use super::*;

    #[tokio::test]
    async fn test_stored_customer_is_analyzed_as_of_date() {
        let (app, _dir) = app_with_data();
        let (status, body) =
            send(app, get("/customers/K-10001/analytics?as_of=2025-08-15")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["as_of"], "2025-08-15");
        assert_eq!(body["customer"]["kundenummer"], "K-10001");
        assert_eq!(body["identity"]["valid"], true);
        assert_eq!(body["year_series"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["risk"]["tier"], "moderat");
        assert_eq!(body["risk"]["trend"], "sharply_deteriorating");
    }

    #[tokio::test]
    async fn test_explanations_follow_reasons() {
        let (app, _dir) = app_with_data();
        let (_, body) = send(app, get("/customers/K-10001/analytics?as_of=2025-08-15")).await;

        let reasons = body["risk"]["reasons"].as_array().expect("reasons");
        let explanations = body["explanations"].as_array().expect("explanations");
        assert!(!reasons.is_empty());
        assert_eq!(reasons.len(), explanations.len());
        assert!(explanations.iter().all(|e| e.as_str().is_some_and(|s| !s.is_empty())));
    }

    #[tokio::test]
    async fn test_unknown_customer_is_not_found() {
        let (app, _dir) = app_with_data();
        let (status, body) = send(app, get("/customers/K-99999/analytics")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_unsafe_customer_number_is_rejected() {
        let (app, _dir) = app_with_data();
        let (status, body) = send(app, get("/customers/K..1/analytics")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_internal_error() {
        let (app, _dir) = app_with_data();
        let (status, _) = send(app, get("/customers/K-BROKEN/analytics")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_invalid_as_of_is_rejected() {
        let (app, _dir) = app_with_data();
        let (status, _) = send(app, get("/customers/K-10001/analytics?as_of=15.08.2025")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

// ============================================================================
// Posted Snapshots
// ============================================================================

mod posted_snapshot {
    use super::*;

    #[tokio::test]
    async fn test_posted_snapshot_matches_stored() {
        let (app, _dir) = app_with_data();
        let (_, stored) =
            send(app.clone(), get("/customers/K-10001/analytics?as_of=2025-08-15")).await;
        let (status, posted) =
            send(app, post_json("/analytics?as_of=2025-08-15", SAMPLE_SNAPSHOT)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(stored, posted);
    }

    #[tokio::test]
    async fn test_empty_snapshot_is_low_risk() {
        let (app, _dir) = app_with_data();
        let (status, body) = send(app, post_json("/analytics?as_of=2025-08-15", "{}")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["risk"]["tier"], "lav");
        assert_eq!(body["claims"], json!([]));
        assert_eq!(body["year_series"].as_array().map(Vec::len), Some(1));
    }
}

// ============================================================================
// Identity Validation
// ============================================================================

mod identity {
    use super::*;

    #[tokio::test]
    async fn test_valid_number_is_decoded() {
        let (app, _dir) = app_with_data();
        let body = json!({ "fødselsnummer": IdentityFixtures::male() }).to_string();
        let (status, result) = send(app, post_json("/identity/validate", &body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["valid"], true);
        assert_eq!(result["sex"], "Mann");
        assert_eq!(result["birth_date"], "1999-12-01");
    }

    #[tokio::test]
    async fn test_invalid_number_is_still_ok() {
        let (app, _dir) = app_with_data();
        let body = json!({ "fodselsnummer": "01139912345" }).to_string();
        let (status, result) = send(app, post_json("/identity/validate", &body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(result["valid"], false);
        assert_eq!(result["error"]["code"], "invalid_month");
    }
}

// ============================================================================
// Upstream Outages
// ============================================================================

mod upstream_outage {
    use super::*;
    use core_kernel::CustomerNumber;
    use domain_analytics::ports::mock::MockSnapshotPort;
    use domain_analytics::AnalyticsService;
    use std::sync::Arc;
    use test_utils::SnapshotFixtures;

    async fn app_with_mock(unavailable: bool) -> Router {
        let port = MockSnapshotPort::with_snapshots(vec![(
            CustomerNumber::new("K-10001"),
            SnapshotFixtures::sample(),
        )])
        .await;
        port.set_unavailable(unavailable);

        let config = ApiConfig::default();
        let service = Arc::new(AnalyticsService::new(Arc::new(port), config.risk));
        create_router(service, config)
    }

    #[tokio::test]
    async fn test_snapshot_from_port_is_analyzed() {
        let app = app_with_mock(false).await;
        let (status, body) =
            send(app, get("/customers/K-10001/analytics?as_of=2025-08-15")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["risk"]["tier"], "moderat");
    }

    #[tokio::test]
    async fn test_unavailable_source_gives_503_without_partial_result() {
        let app = app_with_mock(true).await;
        let (status, body) =
            send(app, get("/customers/K-10001/analytics?as_of=2025-08-15")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "unavailable");
        assert!(body.get("risk").is_none());
    }

    #[tokio::test]
    async fn test_unavailable_source_is_not_ready() {
        let app = app_with_mock(true).await;
        let (status, body) = send(app, get("/health/ready")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["snapshot_source"]["status"], "unhealthy");
    }
}
