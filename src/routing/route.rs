//! Route definitions.

use super::pattern::PathPattern;
use super::view::ViewKind;

/// Index of a route within its table, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(pub u32);

/// A single declared mapping from a path pattern to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Unique route name, e.g. "Trade".
    pub name: String,

    /// Pattern the navigation path must match.
    pub pattern: PathPattern,

    /// View instantiated on match.
    pub view: ViewKind,

    /// Whether matched path parameters become the view's inputs.
    pub props_from_params: bool,
}

impl Route {
    pub fn new(name: impl Into<String>, pattern: PathPattern, view: ViewKind) -> Self {
        Self {
            name: name.into(),
            pattern,
            view,
            props_from_params: false,
        }
    }

    /// Forward matched path parameters to the view.
    pub fn with_props(mut self) -> Self {
        self.props_from_params = true;
        self
    }
}
