//! Integration tests for the prediction REST client and the dashboard controller.
//!
//! Each test serves one canned HTTP response from an in-process stub and checks
//! what the client requested and how the outcome surfaced.

#![cfg(feature = "native")]

use std::time::Duration;

use futures_util::StreamExt;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::timeout;
use tokio_test::{assert_err, assert_ok};

use stock_predictor::prelude::*;

const TEST_TIMEOUT: Duration = Duration::from_secs(10);

const SAMPLE: &str = r#"{"symbol":"AAPL","currentPrice":150.0,"predictedPrice":155.0,"confidence":0.82,"timestamp":"t","predictions":{"oneDay":155.0,"oneWeek":160.0,"oneMonth":170.0},"historicalPrices":[{"timestamp":"t0","price":148.0},{"timestamp":"t1","price":150.0}]}"#;

/// A one-shot HTTP server.
struct Stub {
    base_url: String,
    path: oneshot::Receiver<String>,
}

/// Serve a single response with the given status line (e.g. `"200 OK"`).
async fn serve(status: &'static str, body: impl Into<String>) -> Stub {
    let body = body.into();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (path_tx, path_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let request = String::from_utf8_lossy(&request);
        let path = request
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(1))
            .unwrap_or_default()
            .to_string();
        let _ = path_tx.send(path);

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    Stub {
        base_url: format!("http://{}", addr),
        path: path_rx,
    }
}

fn client_for(stub: &Stub) -> PredictorClient {
    PredictorClient::builder()
        .base_url(&stub.base_url)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

fn expected_sample() -> PredictionResponse {
    serde_json::from_str(SAMPLE).unwrap()
}

// ─── Client ──────────────────────────────────────────────────────────────────

mod client {
    use super::*;

    #[tokio::test]
    async fn test_lowercase_symbol_requests_uppercase_path() {
        let stub = serve("200 OK", SAMPLE).await;
        let client = client_for(&stub);

        let resp = assert_ok!(client.predictions().get("aapl").await);
        assert_eq!(stub.path.await.unwrap(), "/predict/AAPL");
        assert_eq!(resp, expected_sample());
    }

    #[tokio::test]
    async fn test_symbol_is_path_encoded() {
        let stub = serve("200 OK", SAMPLE).await;
        let client = client_for(&stub);

        assert_ok!(client.predictions().get(" ^gspc ").await);
        assert_eq!(stub.path.await.unwrap(), "/predict/%5EGSPC");
    }

    #[tokio::test]
    async fn test_unknown_fields_are_ignored() {
        let body = SAMPLE.replacen('{', r#"{"model":"v2","latencyMs":12,"#, 1);
        let stub = serve("200 OK", body).await;

        let resp = assert_ok!(client_for(&stub).predictions().get("AAPL").await);
        assert_eq!(resp, expected_sample());
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let stub = serve("200 OK", "{\"symbol\": \"AAPL\", ").await;

        let err = assert_err!(client_for(&stub).predictions().get("AAPL").await);
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.to_string().starts_with("Malformed prediction response"));
    }

    #[tokio::test]
    async fn test_missing_field_is_decode_error() {
        let body = SAMPLE.replace(r#""confidence":0.82,"#, "");
        let stub = serve("200 OK", body).await;

        let err = assert_err!(client_for(&stub).predictions().get("AAPL").await);
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_non_2xx_is_status_error() {
        let stub = serve("404 Not Found", r#"{"detail":"Unknown symbol"}"#).await;

        let err = assert_err!(client_for(&stub).predictions().get("ZZZZ").await);
        match err {
            FetchError::Status { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("Unknown symbol"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_not_retried() {
        let stub = serve("503 Service Unavailable", "down").await;
        let client = client_for(&stub);

        let err = assert_err!(client.predictions().get("AAPL").await);
        assert_eq!(err.kind(), ErrorKind::HttpStatus);

        // The stub only accepts once; a second attempt would be refused.
        let err = assert_err!(client.predictions().get("AAPL").await);
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = PredictorClient::builder()
            .base_url(&format!("http://{}", addr))
            .build()
            .unwrap();
        let err = assert_err!(client.predictions().get("AAPL").await);
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_hung_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let client = PredictorClient::builder()
            .base_url(&format!("http://{}", addr))
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let err = assert_err!(client.predictions().get("AAPL").await);
        assert!(matches!(err, FetchError::Timeout));
    }

    #[tokio::test]
    async fn test_blank_symbol_is_input_error() {
        let client = PredictorClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let err = assert_err!(client.predictions().get("").await);
        assert!(matches!(err, FetchError::InvalidSymbol(SymbolError::Empty)));
    }

    #[tokio::test]
    async fn test_dot_only_symbol_is_rejected_before_request() {
        for symbol in [".", ".."] {
            let stub = serve("200 OK", SAMPLE).await;

            let err = assert_err!(client_for(&stub).predictions().get(symbol).await);
            assert_eq!(err.kind(), ErrorKind::Input);
            assert!(matches!(
                err,
                FetchError::InvalidSymbol(SymbolError::DotSegment)
            ));

            // The stub reports a path only once something connects.
            assert!(timeout(Duration::from_millis(200), stub.path).await.is_err());
        }
    }
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

mod dashboard {
    use super::*;

    async fn settle<S: PredictionSource>(controller: &DashboardController<S>) -> DashboardEvent {
        let events = controller.events();
        tokio::pin!(events);
        timeout(TEST_TIMEOUT, async {
            while let Some(ev) = events.next().await {
                if !matches!(ev, DashboardEvent::Changed) {
                    return ev;
                }
            }
            panic!("event stream ended");
        })
        .await
        .expect("timed out waiting for fetch")
    }

    #[tokio::test]
    async fn test_submit_renders_sample_prediction() {
        let stub = serve("200 OK", SAMPLE).await;
        let controller = DashboardController::new(client_for(&stub));

        let request = controller.submit_symbol("aapl").await.unwrap();
        assert_eq!(settle(&controller).await, DashboardEvent::Resolved { request });
        assert_eq!(stub.path.await.unwrap(), "/predict/AAPL");

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.phase(), &Phase::Success(expected_sample()));

        let Body::Prediction(card) = controller.screen().await.body else {
            panic!("expected prediction card");
        };
        assert_eq!(card.trend, Trend::Up);
        assert_eq!(card.confidence, "82%");
        assert_eq!(card.chart.len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_body_fails_never_succeeds() {
        let stub = serve("200 OK", "not json").await;
        let controller = DashboardController::new(client_for(&stub));

        controller.submit_symbol("aapl").await.unwrap();
        settle(&controller).await;

        let snapshot = controller.snapshot().await;
        assert!(snapshot.phase().data().is_none());
        let message = snapshot.phase().error().unwrap();
        assert!(message.starts_with("Malformed prediction response"));
    }

    #[tokio::test]
    async fn test_empty_history_renders_without_chart() {
        let body = SAMPLE.replace(
            r#"[{"timestamp":"t0","price":148.0},{"timestamp":"t1","price":150.0}]"#,
            "[]",
        );
        let stub = serve("200 OK", body).await;
        let controller = DashboardController::new(client_for(&stub));

        controller.submit_symbol("aapl").await.unwrap();
        settle(&controller).await;

        let Body::Prediction(card) = controller.screen().await.body else {
            panic!("expected prediction card");
        };
        assert!(card.chart.is_empty());
        assert_eq!(card.chart.sparkline(48), "");
    }

    #[tokio::test]
    async fn test_whitespace_submit_fails_with_input_error() {
        let controller = DashboardController::new(
            PredictorClient::builder()
                .base_url("http://127.0.0.1:9")
                .build()
                .unwrap(),
        );

        assert!(controller.submit_symbol("  ").await.is_some());
        settle(&controller).await;

        let snapshot = controller.snapshot().await;
        assert_eq!(
            snapshot.phase().error(),
            Some("Invalid symbol: Symbol is empty")
        );
    }
}
