//! Stock details passthrough against an in-process mock broker.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower::ServiceExt;
use trade_router::config::{RouterConfig, StockApiConfig};
use trade_router::http::HttpServer;

mod common;

#[derive(Clone, Default)]
struct Broker {
    tokens_issued: Arc<AtomicUsize>,
}

async fn issue_token(State(broker): State<Broker>, Json(body): Json<serde_json::Value>) -> impl IntoResponse {
    if body["grant_type"] != "client_credentials" || body["appkey"] != "key" || body["appsecret"] != "secret" {
        return (StatusCode::FORBIDDEN, Json(json!({ "error": "bad credentials" })));
    }
    broker.tokens_issued.fetch_add(1, Ordering::SeqCst);
    (
        StatusCode::OK,
        Json(json!({ "access_token": "tok-1", "token_type": "Bearer", "expires_in": 86400 })),
    )
}

async fn inquire_price(headers: HeaderMap, Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).unwrap_or("");
    if header("authorization") != "Bearer tok-1"
        || header("appkey") != "key"
        || header("tr_id") != "FHKST01010100"
        || query.get("FID_COND_MRKT_DIV_CODE").map(String::as_str) != Some("J")
    {
        return (StatusCode::UNAUTHORIZED, Json(json!({})));
    }

    let body = match query.get("FID_INPUT_ISCD").map(String::as_str) {
        Some("005930") => json!({ "rt_cd": "0", "msg1": "OK", "output": { "stck_prpr": "71500" } }),
        Some("000000") => json!({ "rt_cd": "0", "msg1": "OK", "output": { "stck_prpr": "" } }),
        _ => json!({ "rt_cd": "1", "msg1": "no such stock" }),
    };
    (StatusCode::OK, Json(body))
}

async fn start_broker(broker: Broker) -> SocketAddr {
    let app = Router::new()
        .route("/oauth2/tokenP", post(issue_token))
        .route("/uapi/domestic-stock/v1/quotations/inquire-price", get(inquire_price))
        .with_state(broker);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });
    addr
}

fn config_for(base_url: String) -> RouterConfig {
    RouterConfig {
        stock_api: StockApiConfig {
            enabled: true,
            base_url,
            app_key: "key".into(),
            app_secret: "secret".into(),
            timeout_secs: 5,
        },
        ..RouterConfig::default()
    }
}

#[tokio::test]
async fn test_details_reuse_one_token() {
    let broker = Broker::default();
    let addr = start_broker(broker.clone()).await;
    let server = HttpServer::new(config_for(format!("http://{addr}"))).unwrap();

    for _ in 0..2 {
        let res = server
            .router()
            .oneshot(common::get("/api/stock/details/005930"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            common::json_body(res).await,
            json!({ "code": "005930", "price": "71500" })
        );
    }
    assert_eq!(broker.tokens_issued.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unknown_stock_is_404() {
    let addr = start_broker(Broker::default()).await;
    let server = HttpServer::new(config_for(format!("http://{addr}/"))).unwrap();

    for code in ["999999", "000000"] {
        let res = server
            .router()
            .oneshot(common::get(&format!("/api/stock/details/{code}")))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(common::json_body(res).await["error"], "stock_not_found");
    }
}

#[tokio::test]
async fn test_disabled_is_503() {
    let server = HttpServer::new(RouterConfig::default()).unwrap();
    let res = server
        .router()
        .oneshot(common::get("/api/stock/details/005930"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(common::json_body(res).await["error"], "stock_api_disabled");
}

#[tokio::test]
async fn test_rejected_credentials_is_502() {
    let addr = start_broker(Broker::default()).await;
    let mut config = config_for(format!("http://{addr}"));
    config.stock_api.app_secret = "wrong".into();
    let server = HttpServer::new(config).unwrap();

    let res = server
        .router()
        .oneshot(common::get("/api/stock/details/005930"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(common::json_body(res).await["error"], "upstream_error");
}

#[tokio::test]
async fn test_unreachable_broker_is_502() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let server = HttpServer::new(config_for(format!("http://{addr}"))).unwrap();
    let res = server
        .router()
        .oneshot(common::get("/api/stock/details/005930"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
}
