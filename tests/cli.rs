//! Tests of the `router-cli` binary in local mode.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn router_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_router-cli"))
        .args(args)
        .output()
        .expect("failed to run router-cli")
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_resolve_prints_location() {
    let out = router_cli(&["resolve", "/trade/005930"]);
    assert!(out.status.success());

    let location: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(location["route"], "Trade");
    assert_eq!(location["params"]["stockCode"], "005930");
}

#[test]
fn test_resolve_not_found_exits_1() {
    let out = router_cli(&["resolve", "/trade/"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no route matches path '/trade/'"), "{stderr}");
}

#[test]
fn test_routes_lists_standard_table() {
    let out = router_cli(&["routes"]);
    assert!(out.status.success());

    let routes: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(routes[0]["path"], "/");
    assert_eq!(routes[1]["path"], "/trade/:stockCode");
}

#[test]
fn test_check_valid_config() {
    let file = config_file(
        r#"
[[routes]]
name = "Home"
path = "/"
component = "Home"

[[routes]]
name = "Trade"
path = "/trade/:stockCode"
component = "Trade"
props = true

[[routes]]
name = "TradeIndex"
path = "/trade/all"
component = "Home"
"#,
    );
    let path = file.path().to_str().unwrap();

    let out = router_cli(&["--config", path, "check"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "OK: 3 routes");
}

#[test]
fn test_check_invalid_config_fails() {
    let file = config_file(
        r#"
[[routes]]
name = "Trade"
path = "/trade/:stockCode"
component = "Trade"

[[routes]]
name = "Quote"
path = "/trade/:code"
component = "Trade"
"#,
    );
    let path = file.path().to_str().unwrap();

    let out = router_cli(&["--config", path, "check"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("route 'Quote' is ambiguous"), "{stderr}");
}

#[test]
fn test_remote_check_rejected() {
    let out = router_cli(&["--url", "http://127.0.0.1:9", "check"]);
    assert_eq!(out.status.code(), Some(1));
}
