//! Views the table can dispatch to.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::params::{FromPathParams, PathParams, RouteParams, TradeParams};

/// The closed set of application views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKind {
    Home,
    Trade,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Home => "Home",
            ViewKind::Trade => "Trade",
        }
    }

    /// Path parameters this view needs when its route forwards them.
    pub fn required_params(&self) -> &'static [&'static str] {
        match self {
            ViewKind::Home => <<Home as View>::Params as FromPathParams>::REQUIRED,
            ViewKind::Trade => <<Trade as View>::Params as FromPathParams>::REQUIRED,
        }
    }

    /// Build the typed inputs for this view from raw bindings.
    pub fn build_params(&self, bindings: &PathParams) -> Option<RouteParams> {
        match self {
            ViewKind::Home => {
                <<Home as View>::Params as FromPathParams>::from_path_params(bindings).map(|()| RouteParams::None)
            }
            ViewKind::Trade => {
                <<Trade as View>::Params as FromPathParams>::from_path_params(bindings).map(RouteParams::Trade)
            }
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a view: which kind it is and what it takes as input.
pub trait View {
    const KIND: ViewKind;
    type Params: FromPathParams;
}

/// Landing page.
#[derive(Debug, Clone, Copy)]
pub struct Home;

impl View for Home {
    const KIND: ViewKind = ViewKind::Home;
    type Params = ();
}

/// Order entry page for one stock.
#[derive(Debug, Clone, Copy)]
pub struct Trade;

impl View for Trade {
    const KIND: ViewKind = ViewKind::Trade;
    type Params = TradeParams;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_params() {
        assert!(ViewKind::Home.required_params().is_empty());
        assert_eq!(ViewKind::Trade.required_params(), &["stockCode"]);
    }

    #[test]
    fn test_deserialize_by_component_name() {
        let kind: ViewKind = serde_json::from_str("\"Trade\"").unwrap();
        assert_eq!(kind, ViewKind::Trade);
        assert!(serde_json::from_str::<ViewKind>("\"Settings\"").is_err());
    }
}
