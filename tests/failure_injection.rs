//! Transport failure handling.

use axum::http::{Method, StatusCode};
use relay_proxy::HttpServer;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_unreachable_upstream_returns_proxy_error() {
    let upstream = common::unreachable_addr().await;
    let server = HttpServer::new(common::proxy_config(upstream)).unwrap();

    let (status, _, body) = common::send(&server, common::request(Method::GET, "/anything?q=1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(common::json(&body), json!({ "error": "Proxy error" }));

    let entries = server.log_store().list(10);
    let failed: Vec<_> = entries.iter().filter(|e| e.message == "request failed").collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(entries[0].message, "request failed");
    let error = failed[0].data.as_ref().unwrap()["error"].as_str().unwrap();
    assert!(!error.is_empty());
    // Internal detail stays in the log, never in the response.
    assert!(!String::from_utf8_lossy(&body).contains(error));
}

#[tokio::test]
async fn test_failure_over_the_wire() {
    let upstream = common::unreachable_addr().await;
    let server = HttpServer::new(common::proxy_config(upstream)).unwrap();
    let store = server.log_store();
    let (proxy_addr, shutdown) = common::spawn_proxy(server).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client
        .delete(format!("http://{proxy_addr}/items/1"))
        .send()
        .await
        .expect("Proxy unreachable");

    assert_eq!(res.status(), 500);
    assert_eq!(res.text().await.unwrap(), r#"{"error":"Proxy error"}"#);
    assert_eq!(store.len(), 2);

    shutdown.trigger();
}

#[tokio::test]
async fn test_proxy_recovers_after_failures() {
    let upstream = common::unreachable_addr().await;
    let server = HttpServer::new(common::proxy_config(upstream)).unwrap();

    for _ in 0..3 {
        let (status, _, _) = common::send(&server, common::request(Method::GET, "/")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
    let (status, _, body) = common::send(&server, common::request(Method::GET, "/_health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(common::json(&body)["logs"], 6);
}
