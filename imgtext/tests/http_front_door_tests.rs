use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use imgtext::api::{create_router, AppState};
use imgtext::error::{ImgtextError, Result};
use imgtext::handler::RequestHandler;
use imgtext::models::{ContentBlock, ObjectLocation};
use imgtext::ocr::TextDetector;

#[derive(Default)]
struct StubDetector {
    fail: bool,
    calls: Mutex<Vec<ObjectLocation>>,
}

#[async_trait]
impl TextDetector for StubDetector {
    async fn detect(&self, location: &ObjectLocation) -> Result<Vec<ContentBlock>> {
        self.calls.lock().unwrap().push(location.clone());
        if self.fail {
            return Err(ImgtextError::Textract("AccessDeniedException".to_string()));
        }
        Ok(vec![
            ContentBlock::line("Invoice 1024"),
            ContentBlock::word("Invoice"),
            ContentBlock::line("Total 12.50"),
        ])
    }
}

async fn setup_test_app(detector: Arc<StubDetector>) -> SocketAddr {
    let handler = RequestHandler::new(detector);
    let app = create_router(AppState::new(handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

fn assert_fixed_headers(response: &reqwest::Response) {
    let headers = response.headers();
    assert_eq!(headers["content-type"], "*/*");
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "'POST','OPTIONS'");
    assert_eq!(
        headers["access-control-allow-headers"],
        "Content-Type, Authorization"
    );
}

#[tokio::test]
async fn post_with_json_body_returns_lines() {
    let detector = Arc::new(StubDetector::default());
    let addr = setup_test_app(detector.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/extract"))
        .json(&json!({"s3_url": "https://scans.s3.amazonaws.com/2024/invoice.png"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_fixed_headers(&response);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"text": ["Invoice 1024", "Total 12.50"]}"#
    );
    assert_eq!(
        *detector.calls.lock().unwrap(),
        vec![ObjectLocation::new("scans", "2024/invoice.png")]
    );
}

#[tokio::test]
async fn header_overrides_query_parameter() {
    let detector = Arc::new(StubDetector::default());
    let addr = setup_test_app(detector.clone()).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/"))
        .query(&[("s3_url", "https://fromquery.s3.amazonaws.com/q.png")])
        .header("s3_url", "https://fromheader.s3.amazonaws.com/h.png")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        *detector.calls.lock().unwrap(),
        vec![ObjectLocation::new("fromheader", "h.png")]
    );
}

#[tokio::test]
async fn ocr_failure_is_reported_in_body_with_200() {
    let detector = Arc::new(StubDetector {
        fail: true,
        ..Default::default()
    });
    let addr = setup_test_app(detector).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/"))
        .query(&[("s3_url", "https://locked.s3.amazonaws.com/secret.png")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_fixed_headers(&response);
    let body: Value = serde_json::from_str(&response.text().await.unwrap()).unwrap();
    assert_eq!(
        body,
        json!({"text": {"error": "Unable to process Textract request"}})
    );
}

#[tokio::test]
async fn invalid_json_body_is_a_failed_invocation() {
    let detector = Arc::new(StubDetector::default());
    let addr = setup_test_app(detector.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/"))
        .header("s3_url", "https://b.s3.amazonaws.com/x.png")
        .body("s3_url=oops")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Internal server error"}));
    assert!(detector.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_address_is_a_failed_invocation() {
    let detector = Arc::new(StubDetector::default());
    let addr = setup_test_app(detector.clone()).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    assert!(detector.calls.lock().unwrap().is_empty());
}
