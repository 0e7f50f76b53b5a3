//! Stock details and the broker's wire format.

use serde::{Deserialize, Serialize};

/// Current price of one stock, as served by `/api/stock/details/{stockCode}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDetails {
    pub code: String,

    /// Current price as reported by the broker (`stck_prpr`).
    pub price: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub grant_type: &'static str,
    pub appkey: &'a str,
    pub appsecret: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,

    /// Lifetime in seconds.
    pub expires_in: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PriceResponse {
    /// "0" on success.
    pub rt_cd: String,

    #[serde(default)]
    pub msg1: String,

    pub output: Option<PriceOutput>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PriceOutput {
    #[serde(default)]
    pub stck_prpr: String,
}

impl PriceResponse {
    pub(crate) fn into_details(self, code: &str) -> Option<StockDetails> {
        if self.rt_cd != "0" {
            return None;
        }
        self.output
            .filter(|output| !output.stck_prpr.is_empty())
            .map(|output| StockDetails {
                code: code.to_string(),
                price: output.stck_prpr,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> PriceResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_price_extracted() {
        let res = parse(r#"{"rt_cd":"0","msg1":"OK","output":{"stck_prpr":"71500","stck_oprc":"71000"}}"#);
        assert_eq!(
            res.into_details("005930"),
            Some(StockDetails {
                code: "005930".into(),
                price: "71500".into(),
            })
        );
    }

    #[test]
    fn test_rejection_is_none() {
        let res = parse(r#"{"rt_cd":"1","msg1":"invalid code","output":{"stck_prpr":"0"}}"#);
        assert_eq!(res.into_details("XXXX"), None);
    }

    #[test]
    fn test_missing_or_empty_price_is_none() {
        assert_eq!(parse(r#"{"rt_cd":"0"}"#).into_details("005930"), None);
        assert_eq!(
            parse(r#"{"rt_cd":"0","output":{"stck_prpr":""}}"#).into_details("005930"),
            None
        );
    }
}
