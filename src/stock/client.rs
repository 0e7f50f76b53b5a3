//! Broker API client with a shared access token.

use std::fmt;
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::sync::Mutex;

use super::types::{PriceResponse, StockDetails, TokenRequest, TokenResponse};
use crate::config::StockApiConfig;

const TOKEN_PATH: &str = "/oauth2/tokenP";
const PRICE_PATH: &str = "/uapi/domestic-stock/v1/quotations/inquire-price";

/// Transaction id of the current-price inquiry.
const PRICE_TR_ID: &str = "FHKST01010100";

/// Tokens this close to expiry are renewed before use.
const TOKEN_RENEW_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum StockApiError {
    #[error("broker request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("broker answered {status} to {context}")]
    Http {
        status: reqwest::StatusCode,
        context: &'static str,
    },
}

struct AccessToken {
    value: String,
    issued_at: Instant,
    lifetime: Duration,
}

impl AccessToken {
    fn is_fresh(&self) -> bool {
        self.issued_at.elapsed() + TOKEN_RENEW_MARGIN < self.lifetime
    }
}

/// Client for the broker's quotation API.
pub struct StockApiClient {
    http: reqwest::Client,
    base_url: String,
    app_key: String,
    app_secret: String,
    token: Mutex<Option<AccessToken>>,
}

impl fmt::Debug for StockApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StockApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl StockApiClient {
    pub fn new(config: &StockApiConfig) -> Result<Self, StockApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_key: config.app_key.clone(),
            app_secret: config.app_secret.clone(),
            token: Mutex::new(None),
        })
    }

    /// Current price of `code`. `None` when the broker knows no price for it.
    pub async fn stock_details(&self, code: &str) -> Result<Option<StockDetails>, StockApiError> {
        let token = self.access_token().await?;

        let response = self
            .http
            .get(format!("{}{PRICE_PATH}", self.base_url))
            .bearer_auth(&token)
            .header("appkey", &self.app_key)
            .header("appsecret", &self.app_secret)
            .header("tr_id", PRICE_TR_ID)
            .query(&[("FID_COND_MRKT_DIV_CODE", "J"), ("FID_INPUT_ISCD", code)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StockApiError::Http {
                status,
                context: "price inquiry",
            });
        }

        let body: PriceResponse = response.json().await?;
        if body.rt_cd != "0" {
            tracing::warn!(code = %code, rt_cd = %body.rt_cd, message = %body.msg1, "Broker rejected price inquiry");
        }
        Ok(body.into_details(code))
    }

    /// The cached token, or a new one when it is missing or about to expire.
    async fn access_token(&self) -> Result<String, StockApiError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh()) {
            return Ok(token.value.clone());
        }

        let response = self
            .http
            .post(format!("{}{TOKEN_PATH}", self.base_url))
            .json(&TokenRequest {
                grant_type: "client_credentials",
                appkey: &self.app_key,
                appsecret: &self.app_secret,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StockApiError::Http {
                status,
                context: "token request",
            });
        }

        let body: TokenResponse = response.json().await?;
        tracing::info!(expires_in = body.expires_in, "Broker access token issued");

        let value = body.access_token.clone();
        *cached = Some(AccessToken {
            value: body.access_token,
            issued_at: Instant::now(),
            lifetime: Duration::from_secs(body.expires_in),
        });
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_freshness() {
        let token = |lifetime| AccessToken {
            value: "t".into(),
            issued_at: Instant::now(),
            lifetime: Duration::from_secs(lifetime),
        };
        assert!(token(86_400).is_fresh());
        assert!(!token(60).is_fresh());
        assert!(!token(0).is_fresh());
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client = StockApiClient::new(&StockApiConfig {
            enabled: true,
            app_key: "key-123".into(),
            app_secret: "secret-456".into(),
            ..StockApiConfig::default()
        })
        .unwrap();
        let text = format!("{client:?}");
        assert!(!text.contains("key-123"));
        assert!(!text.contains("secret-456"));
    }
}
