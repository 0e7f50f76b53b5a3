//! Routing error types.

use thiserror::Error;

use super::pattern::PatternError;

/// Errors returned while navigating with a built table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No declared route matches the requested path.
    #[error("no route matches path '{path}'")]
    NotFound { path: String },

    /// Named navigation referenced a route that does not exist.
    #[error("no route named '{0}'")]
    UnknownName(String),

    /// Named navigation did not supply a parameter the pattern needs.
    #[error("route '{route}' needs a value for parameter '{param}'")]
    MissingParam { route: String, param: String },

    /// Named navigation supplied a value that cannot stand in one path segment.
    #[error("value '{value}' for parameter '{param}' of route '{route}' cannot appear in a path")]
    InvalidParam {
        route: String,
        param: String,
        value: String,
    },
}

/// Errors returned while building a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("route '{route}' has an invalid path: {source}")]
    InvalidPattern {
        route: String,
        #[source]
        source: PatternError,
    },

    #[error("route name '{0}' is declared more than once")]
    DuplicateName(String),

    #[error("route '{route}' is ambiguous with an earlier route: {reason}")]
    Conflict { route: String, reason: String },

    #[error("route '{route}' forwards props to view {view} but its path has no ':{param}' segment")]
    MissingParam {
        route: String,
        view: String,
        param: String,
    },
}
