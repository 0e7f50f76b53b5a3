//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store validated routes in declaration order
//! - Resolve a navigation path to one route plus its bindings
//! - Build the typed view inputs for the matched route
//! - Reverse-route a name and bindings back into a path
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - Literal segments win over parameters at the same position
//! - Query string and fragment are ignored for matching
//! - One trailing slash is ignored and literals match ignoring ASCII case;
//!   parameter values keep the case they were written in
//! - Explicit NotFound rather than a silent fallback view

use std::collections::HashMap;
use std::fmt;

use matchit::Router as PathRouter;
use serde::Serialize;

use super::error::{RouteError, TableError};
use super::params::{FromPathParams, PathParams, RouteParams};
use super::pattern::{FillError, PathPattern};
use super::route::{Route, RouteId};
use super::view::{View, ViewKind};
use crate::config::RouteConfig;

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub id: RouteId,
    pub route: &'a Route,

    /// Every parameter bound by the pattern, whether forwarded or not.
    pub bindings: PathParams,

    /// Inputs handed to the view.
    pub params: RouteParams,
}

impl Resolution<'_> {
    pub fn view(&self) -> ViewKind {
        self.route.view
    }

    /// Typed constructor argument for view `V`.
    ///
    /// `None` if the resolved view is not `V`, or `V` needs inputs its
    /// route does not forward.
    pub fn params_for<V: View>(&self) -> Option<V::Params> {
        if self.route.view != V::KIND {
            return None;
        }
        if self.route.props_from_params {
            V::Params::from_path_params(&self.bindings)
        } else {
            V::Params::from_path_params(&PathParams::new())
        }
    }

    /// Owned, serialisable summary of this resolution.
    pub fn to_location(&self, path: &str) -> Location {
        Location {
            path: path.to_string(),
            route: self.route.name.clone(),
            view: self.route.view,
            params: self.params.clone(),
        }
    }
}

/// An owned resolved navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    pub route: String,
    pub view: ViewKind,
    pub params: RouteParams,
}

/// Accumulates routes before validation.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Validate and compile the table.
    pub fn build(self) -> Result<RouteTable, TableError> {
        let mut name_index = HashMap::with_capacity(self.routes.len());
        let mut path_router = PathRouter::new();

        for (index, route) in self.routes.iter().enumerate() {
            let id = RouteId(index as u32);

            if name_index.insert(route.name.clone(), id).is_some() {
                return Err(TableError::DuplicateName(route.name.clone()));
            }

            if route.props_from_params {
                if let Some(missing) = route
                    .view
                    .required_params()
                    .iter()
                    .find(|p| !route.pattern.has_param(p))
                {
                    return Err(TableError::MissingParam {
                        route: route.name.clone(),
                        view: route.view.to_string(),
                        param: missing.to_string(),
                    });
                }
            }

            if let Some(earlier) = self.routes[..index]
                .iter()
                .find(|other| other.pattern.same_shape(&route.pattern))
            {
                return Err(TableError::Conflict {
                    route: route.name.clone(),
                    reason: format!("'{}' matches the same paths as '{}'", route.pattern, earlier.name),
                });
            }

            path_router
                .insert(route.pattern.to_matchit(), id)
                .map_err(|e| TableError::Conflict {
                    route: route.name.clone(),
                    reason: e.to_string(),
                })?;
        }

        tracing::debug!(routes = self.routes.len(), "Route table built");

        Ok(RouteTable {
            routes: self.routes,
            name_index,
            path_router,
        })
    }
}

/// The application's immutable route table.
pub struct RouteTable {
    routes: Vec<Route>,
    name_index: HashMap<String, RouteId>,
    path_router: PathRouter<RouteId>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// `/` shows `Home`; `/trade/:stockCode` shows `Trade` with the code as input.
    pub fn standard() -> Result<Self, TableError> {
        Self::from_config(&RouteConfig::standard())
    }

    /// Build from configuration entries, in order.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, TableError> {
        routes
            .iter()
            .try_fold(Self::builder(), |builder, config| {
                let pattern =
                    PathPattern::parse(&config.path).map_err(|source| TableError::InvalidPattern {
                        route: config.name.clone(),
                        source,
                    })?;
                let mut route = Route::new(config.name.clone(), pattern, config.component);
                route.props_from_params = config.props;
                Ok::<_, TableError>(builder.route(route))
            })?
            .build()
    }

    /// Resolve a navigation path to its route.
    pub fn resolve(&self, path: &str) -> Result<Resolution<'_>, RouteError> {
        let not_found = || RouteError::NotFound {
            path: path.to_string(),
        };

        let target = strip_trailing_slash(strip_query_and_fragment(path));
        if !target.starts_with('/') {
            return Err(not_found());
        }

        let id = *self
            .path_router
            .at(&target.to_ascii_lowercase())
            .map_err(|_| not_found())?
            .value;
        let route = &self.routes[id.0 as usize];
        let bindings = route.pattern.bind(target).ok_or_else(not_found)?;

        let params = if route.props_from_params {
            route
                .view
                .build_params(&bindings)
                .ok_or_else(|| RouteError::MissingParam {
                    route: route.name.clone(),
                    param: route.view.required_params().join(","),
                })?
        } else {
            RouteParams::None
        };

        tracing::trace!(path = %path, route = %route.name, "Path resolved");

        Ok(Resolution {
            id,
            route,
            bindings,
            params,
        })
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.name_index
            .get(name)
            .map(|id| &self.routes[id.0 as usize])
    }

    /// Build the concrete path for a named route.
    pub fn href(&self, name: &str, params: &PathParams) -> Result<String, RouteError> {
        let route = self
            .by_name(name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?;
        route
            .pattern
            .fill(params)
            .map_err(|e| match e {
                FillError::Missing(param) => RouteError::MissingParam {
                    route: route.name.clone(),
                    param,
                },
                FillError::Invalid { param, value } => RouteError::InvalidParam {
                    route: route.name.clone(),
                    param,
                    value,
                },
            })
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes)
            .finish()
    }
}

fn strip_query_and_fragment(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    }
}

/// `/trade/X/` is `/trade/X`. The root and `//` are left alone.
fn strip_trailing_slash(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
        _ => path,
    }
}
