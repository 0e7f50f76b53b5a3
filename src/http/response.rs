//! JSON response bodies and error mapping.
//!
//! # Design Decisions
//! - Resolutions are returned as `Location` (path, route, view, params)
//! - RouteNotFound maps to 404, bad input to 400
//! - Broker failures map to 502, a disabled broker to 503
//! - Error bodies always carry a stable machine-readable `error` code

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::routing::{Route, RouteError, ViewKind};
use crate::stock::StockApiError;

/// One entry of `GET /api/routes`.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub path: String,
    pub view: ViewKind,
    pub props: bool,
}

impl From<&Route> for RouteSummary {
    fn from(route: &Route) -> Self {
        Self {
            name: route.name.clone(),
            path: route.pattern.to_string(),
            view: route.view,
            props: route.props_from_params,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

/// Errors surfaced by API handlers.
#[derive(Debug)]
pub enum ApiError {
    Route(RouteError),
    MissingPath,
    StockApiDisabled,
    StockNotFound(String),
    Upstream(StockApiError),
}

impl From<RouteError> for ApiError {
    fn from(e: RouteError) -> Self {
        ApiError::Route(e)
    }
}

impl From<StockApiError> for ApiError {
    fn from(e: StockApiError) -> Self {
        ApiError::Upstream(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Route(RouteError::NotFound { .. })
            | ApiError::Route(RouteError::UnknownName(_))
            | ApiError::StockNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Route(RouteError::MissingParam { .. })
            | ApiError::Route(RouteError::InvalidParam { .. })
            | ApiError::MissingPath => StatusCode::BAD_REQUEST,
            ApiError::StockApiDisabled => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Route(e) => {
                let message = e.to_string();
                match e {
                    RouteError::NotFound { path } => ErrorBody {
                        error: "route_not_found",
                        message,
                        path: Some(path),
                    },
                    RouteError::UnknownName(_) => ErrorBody {
                        error: "unknown_route",
                        message,
                        path: None,
                    },
                    RouteError::MissingParam { .. } => ErrorBody {
                        error: "missing_param",
                        message,
                        path: None,
                    },
                    RouteError::InvalidParam { .. } => ErrorBody {
                        error: "invalid_param",
                        message,
                        path: None,
                    },
                }
            }
            ApiError::MissingPath => ErrorBody {
                error: "missing_path",
                message: "query parameter 'path' is required".to_string(),
                path: None,
            },
            ApiError::StockApiDisabled => ErrorBody {
                error: "stock_api_disabled",
                message: "stock details are not configured".to_string(),
                path: None,
            },
            ApiError::StockNotFound(code) => ErrorBody {
                error: "stock_not_found",
                message: format!("no price for stock '{code}'"),
                path: None,
            },
            ApiError::Upstream(e) => ErrorBody {
                error: "upstream_error",
                message: e.to_string(),
                path: None,
            },
        };
        (status, Json(body)).into_response()
    }
}
