use std::time::Duration;

use super::*;
use crate::error::TransportErrorKind;
use crate::test_support::{StubResponse, StubRoutes, StubServer, refused_url, run_async_test};

fn client() -> Result<ProbeClient, String> {
    ProbeClient::new(Duration::from_secs(5)).map_err(|err| err.to_string())
}

#[test]
fn request_returns_status_headers_and_body() -> Result<(), String> {
    let server = StubServer::spawn(StubRoutes::new().route(
        "GET",
        "/health",
        StubResponse::json(200, serde_json::json!({"status": "OK"}))
            .with_header("X-Frame-Options", "DENY"),
    ))?;
    run_async_test(async {
        let url = format!("{}/health", server.url());
        let response = client()?
            .get(&url, RequestOptions::new())
            .await
            .map_err(|err| err.to_string())?;
        if response.status() != 200 {
            return Err(format!("Unexpected status {}", response.status()));
        }
        if response.header("x-frame-options") != Some("DENY") {
            return Err("Expected case-insensitive header lookup".to_owned());
        }
        if !response.body().contains("OK") {
            return Err(format!("Unexpected body {}", response.body()));
        }
        Ok(())
    })
}

#[test]
fn non_success_status_is_not_an_error() -> Result<(), String> {
    let server = StubServer::spawn(StubRoutes::new())?;
    run_async_test(async {
        let url = format!("{}/missing", server.url());
        let response = client()?
            .get(&url, RequestOptions::new())
            .await
            .map_err(|err| err.to_string())?;
        if response.status() != 404 {
            return Err(format!("Expected 404, got {}", response.status()));
        }
        Ok(())
    })
}

#[test]
fn refused_connection_is_classified() -> Result<(), String> {
    let base = refused_url()?;
    run_async_test(async {
        let result = client()?
            .get(&format!("{}/health", base), RequestOptions::new())
            .await;
        match result {
            Err(err) if err.kind() == TransportErrorKind::ConnectionRefused => Ok(()),
            Err(err) => Err(format!("Expected connection refused, got {:?}", err)),
            Ok(_) => Err("Expected request to fail".to_owned()),
        }
    })
}

#[test]
fn slow_response_is_classified_as_timeout() -> Result<(), String> {
    let server = StubServer::spawn(StubRoutes::new().route(
        "GET",
        "/slow",
        StubResponse::json(200, serde_json::json!({})).with_delay(Duration::from_millis(600)),
    ))?;
    run_async_test(async {
        let url = format!("{}/slow", server.url());
        let result = client()?
            .get(&url, RequestOptions::new().timeout(Duration::from_millis(100)))
            .await;
        match result {
            Err(err) if err.kind() == TransportErrorKind::Timeout => Ok(()),
            Err(err) => Err(format!("Expected timeout, got {:?}", err)),
            Ok(_) => Err("Expected request to time out".to_owned()),
        }
    })
}

#[test]
fn burst_joins_every_request() -> Result<(), String> {
    let server = StubServer::spawn(StubRoutes::new().sequence(
        "POST",
        "/api/auth/login",
        vec![
            StubResponse::json(401, serde_json::json!({})),
            StubResponse::json(401, serde_json::json!({})),
            StubResponse::json(429, serde_json::json!({})),
        ],
    ))?;
    run_async_test(async {
        let url = format!("{}/api/auth/login", server.url());
        let options = RequestOptions::new().json(serde_json::json!({"email": "x"}));
        let outcome = client()?.burst(6, Method::POST, &url, &options).await;
        if outcome.results.len() != 6 {
            return Err(format!("Expected 6 results, got {}", outcome.results.len()));
        }
        if !outcome.any_status(429) {
            return Err("Expected a rate limited response in the burst".to_owned());
        }
        if outcome.failures() != 0 {
            return Err(format!("Unexpected failures: {}", outcome.failures()));
        }
        if server.requests().len() != 6 {
            return Err(format!("Server saw {:?}", server.requests()));
        }
        Ok(())
    })
}

#[test]
fn burst_runs_requests_concurrently() -> Result<(), String> {
    let server = StubServer::spawn(StubRoutes::new().route(
        "GET",
        "/health",
        StubResponse::json(200, serde_json::json!({})).with_delay(Duration::from_millis(300)),
    ))?;
    run_async_test(async {
        let url = format!("{}/health", server.url());
        let outcome = client()?
            .burst(5, Method::GET, &url, &RequestOptions::new())
            .await;
        if outcome.failures() != 0 {
            return Err(format!("Unexpected failures: {:?}", outcome.results));
        }
        // Five sequential 300ms requests would take at least 1500ms.
        if outcome.elapsed >= Duration::from_millis(1200) {
            return Err(format!("Burst looked sequential: {:?}", outcome.elapsed));
        }
        Ok(())
    })
}

#[test]
fn fan_out_preserves_positions() -> Result<(), String> {
    run_async_test(async {
        let values = fan_out(4, |idx| async move { idx.saturating_mul(10) }).await;
        if values != [0, 10, 20, 30] {
            return Err(format!("Unexpected values {:?}", values));
        }
        Ok(())
    })
}
