//! End-to-end tests against a server on a real socket.

use std::time::Duration;

use trade_router::config::{RouteConfig, RouterConfig};
use trade_router::routing::ViewKind;

mod common;

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_resolve_over_tcp() {
    let server = common::start_server(RouterConfig::default()).await;

    let res = client()
        .get(format!("http://{}/api/resolve", server.addr))
        .query(&[("path", "/trade/005930")])
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["params"]["stockCode"], "005930");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_reload_swaps_table() {
    let server = common::start_server(RouterConfig::default()).await;
    let url = format!("http://{}/api/resolve", server.addr);

    let res = client()
        .get(&url)
        .query(&[("path", "/stocks/005930")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    let mut next = RouterConfig::default();
    next.routes[1] = RouteConfig {
        name: "Trade".into(),
        path: "/stocks/:stockCode".into(),
        component: ViewKind::Trade,
        props: true,
    };
    server.config_tx.send(next).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let res = client()
        .get(&url)
        .query(&[("path", "/stocks/005930")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    // The old pattern is gone with the old table.
    let res = client()
        .get(&url)
        .query(&[("path", "/trade/005930")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_invalid_reload_keeps_table() {
    let server = common::start_server(RouterConfig::default()).await;

    let mut broken = RouterConfig::default();
    broken.routes.push(RouteConfig {
        name: "Trade".into(),
        path: "/other".into(),
        component: ViewKind::Home,
        props: false,
    });
    server.config_tx.send(broken).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let res = client()
        .get(format!("http://{}/api/routes", server.addr))
        .send()
        .await
        .unwrap();
    let routes: serde_json::Value = res.json().await.unwrap();
    assert_eq!(routes.as_array().unwrap().len(), 2);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = common::start_server(RouterConfig::default()).await;
    server.shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(5), server.handle)
        .await
        .expect("server did not stop");
    assert!(result.unwrap().is_ok());
}
