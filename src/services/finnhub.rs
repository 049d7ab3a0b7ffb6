use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::models::PriceSample;

/// Quote-fetch failures the monitor distinguishes: both leave the alert
/// active and retried next cycle, but they log differently.
#[derive(Debug, Clone, Error)]
pub enum QuoteError {
    #[error("symbol not found")]
    NotFound,

    #[error("quote request failed: {0}")]
    Transient(String),
}

#[derive(Clone)]
pub struct FinnhubClient {
    http: Client,
    api_key: String,
}

impl FinnhubClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
        }
    }

    fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub async fn quote(&self, symbol: &str) -> Result<QuoteResponse, QuoteError> {
        if !self.has_key() {
            return Err(QuoteError::Transient(
                "FINNHUB_API_KEY is missing in .env".to_string(),
            ));
        }

        let url = "https://finnhub.io/api/v1/quote";
        let res = self
            .http
            .get(url)
            .query(&[("symbol", symbol), ("token", &self.api_key)])
            .send()
            .await
            .map_err(|e| QuoteError::Transient(e.to_string()))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(QuoteError::Transient(format!(
                "Finnhub quote failed: {status} {body}"
            )));
        }

        res.json::<QuoteResponse>()
            .await
            .map_err(|e| QuoteError::Transient(e.to_string()))
    }

    /// Fetch a quote and shape it into a `PriceSample`.
    ///
    /// Finnhub answers unknown symbols with an all-zero quote rather than an
    /// error, so a non-finite or non-positive current price maps to
    /// `NotFound`. A non-positive previous close means there is no prior
    /// session to compare against.
    pub async fn sample(&self, symbol: &str) -> Result<PriceSample, QuoteError> {
        let quote = self.quote(symbol).await?;

        if !quote.c.is_finite() || quote.c <= 0.0 {
            return Err(QuoteError::NotFound);
        }

        let previous_close = (quote.pc.is_finite() && quote.pc > 0.0).then_some(quote.pc);

        Ok(PriceSample {
            symbol: symbol.to_string(),
            current_price: quote.c,
            previous_close,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    // current
    pub c: f64,
    // change
    pub d: f64,
    // percent change
    pub dp: f64,
    // high
    pub h: f64,
    // low
    pub l: f64,
    // open
    pub o: f64,
    // previous close
    pub pc: f64,
    // timestamp
    pub t: i64,
}
