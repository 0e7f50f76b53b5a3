//! API handlers.

use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::request::RequestIdExt;
use crate::http::response::{ApiError, RouteSummary};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::{Location, PathParams};
use crate::stock::StockDetails;

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HrefResponse {
    pub path: String,
}

/// `GET /api/resolve?path=/trade/005930`
pub async fn resolve(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<Location>, ApiError> {
    let start = Instant::now();
    let request_id = headers.request_id();

    let Some(path) = query.path else {
        metrics::record_request("resolve", 400, start);
        return Err(ApiError::MissingPath);
    };

    let table = state.table.load();
    match table.resolve(&path) {
        Ok(resolution) => {
            tracing::debug!(
                request_id = %request_id,
                path = %path,
                route = %resolution.route.name,
                "Resolved"
            );
            metrics::record_resolution(&resolution.route.name, true);
            metrics::record_request("resolve", 200, start);
            Ok(Json(resolution.to_location(&path)))
        }
        Err(e) => {
            tracing::warn!(request_id = %request_id, path = %path, "No route matched");
            metrics::record_resolution("none", false);
            let err = ApiError::from(e);
            metrics::record_request("resolve", err.status().as_u16(), start);
            Err(err)
        }
    }
}

/// `GET /api/routes`
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    let table = state.table.load();
    Json(table.routes().map(RouteSummary::from).collect())
}

/// `GET /api/routes/{name}/href?stockCode=005930`
pub async fn href(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<PathParams>,
) -> Result<Json<HrefResponse>, ApiError> {
    let start = Instant::now();
    let result = state.table.load().href(&name, &params);
    match result {
        Ok(path) => {
            metrics::record_request("href", 200, start);
            Ok(Json(HrefResponse { path }))
        }
        Err(e) => {
            let err = ApiError::from(e);
            metrics::record_request("href", err.status().as_u16(), start);
            Err(err)
        }
    }
}

/// `GET /api/stock/details/{stockCode}`
pub async fn stock_details(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(code): Path<String>,
) -> Result<Json<StockDetails>, ApiError> {
    let start = Instant::now();
    let request_id = headers.request_id();

    let result = match &state.stock_api {
        None => Err(ApiError::StockApiDisabled),
        Some(client) => match client.stock_details(&code).await {
            Ok(Some(details)) => Ok(Json(details)),
            Ok(None) => Err(ApiError::StockNotFound(code)),
            Err(e) => {
                tracing::error!(request_id = %request_id, code = %code, error = %e, "Stock details lookup failed");
                Err(e.into())
            }
        },
    };

    let status = match &result {
        Ok(_) => 200,
        Err(e) => e.status().as_u16(),
    };
    metrics::record_request("stock_details", status, start);
    result
}

/// `GET /healthz`
pub async fn health() -> &'static str {
    "ok"
}
