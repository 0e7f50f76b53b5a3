//! Path bindings and the typed inputs built from them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw `name -> value` bindings produced by matching a path.
///
/// Values are the literal text of the matched segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathParams {
    map: BTreeMap<String, String>,
}

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.map.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for PathParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Conversion from raw bindings into a view's typed input record.
pub trait FromPathParams: Sized {
    /// Parameter names the record needs from the path.
    const REQUIRED: &'static [&'static str];

    /// Returns `None` when a required binding is absent.
    fn from_path_params(params: &PathParams) -> Option<Self>;
}

/// The `Home` view takes no inputs.
impl FromPathParams for () {
    const REQUIRED: &'static [&'static str] = &[];

    fn from_path_params(_params: &PathParams) -> Option<Self> {
        Some(())
    }
}

/// Inputs of the `Trade` view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeParams {
    /// Exchange ticker, e.g. `005930`.
    pub stock_code: String,
}

impl TradeParams {
    pub const STOCK_CODE: &'static str = "stockCode";
}

impl FromPathParams for TradeParams {
    const REQUIRED: &'static [&'static str] = &[Self::STOCK_CODE];

    fn from_path_params(params: &PathParams) -> Option<Self> {
        params.get(Self::STOCK_CODE).map(|code| Self {
            stock_code: code.to_string(),
        })
    }
}

/// Typed inputs handed to the resolved view.
///
/// `None` when the view takes no inputs or its route does not forward
/// path parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RouteParams {
    None,
    Trade(TradeParams),
}

impl RouteParams {
    pub fn is_none(&self) -> bool {
        matches!(self, RouteParams::None)
    }

    pub fn as_trade(&self) -> Option<&TradeParams> {
        match self {
            RouteParams::Trade(params) => Some(params),
            RouteParams::None => None,
        }
    }
}
