//! Currency exchange rates from the Frankfurter API
//!
//! Boundary module, not part of the aggregation core: a thin typed
//! client over `api.frankfurter.app`. Requested currency codes are
//! checked against the service's supported set before the rates query
//! goes out. No retry logic lives here; a failed lookup surfaces as an
//! error for the caller to handle.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A rate table keyed by currency code
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    pub base: String,
    /// The date the rates were published for
    pub date: NaiveDate,
    pub rates: HashMap<String, f64>,
}

/// Client for the Frankfurter exchange-rate API
pub struct RatesClient {
    http: Client,
    base_url: String,
}

impl RatesClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client against the public Frankfurter endpoint
    pub fn frankfurter() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Supported currencies: code to display name
    pub async fn currencies(&self) -> Result<BTreeMap<String, String>> {
        let url = format!("{}/currencies", self.base_url);
        debug!(%url, "Fetching supported currencies");
        let table = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(table)
    }

    /// Latest rates for `base`, optionally narrowed to one target currency
    pub async fn latest(&self, base: &str, target: Option<&str>) -> Result<RateTable> {
        let base = normalize_code(base);
        let target = target.map(normalize_code);
        self.validate_codes(&base, target.as_deref()).await?;

        let url = self.rates_url("latest", &base, target.as_deref());
        self.fetch_rates(&url).await
    }

    /// Rates as published on a historical date
    pub async fn historical(
        &self,
        date: NaiveDate,
        base: &str,
        target: Option<&str>,
    ) -> Result<RateTable> {
        let base = normalize_code(base);
        let target = target.map(normalize_code);
        self.validate_codes(&base, target.as_deref()).await?;

        let url = self.rates_url(&date.format("%Y-%m-%d").to_string(), &base, target.as_deref());
        self.fetch_rates(&url).await
    }

    async fn fetch_rates(&self, url: &str) -> Result<RateTable> {
        debug!(%url, "Fetching exchange rates");
        let table: RateTable = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        info!(
            base = %table.base,
            date = %table.date,
            rates = table.rates.len(),
            "Exchange rates received"
        );
        Ok(table)
    }

    async fn validate_codes(&self, base: &str, target: Option<&str>) -> Result<()> {
        let supported = self.currencies().await?;
        for code in std::iter::once(base).chain(target) {
            if !supported.contains_key(code) {
                return Err(Error::Currency(format!(
                    "{} (supported: {})",
                    code,
                    supported.keys().cloned().collect::<Vec<_>>().join(", ")
                )));
            }
        }
        Ok(())
    }

    fn rates_url(&self, segment: &str, base: &str, target: Option<&str>) -> String {
        match target {
            Some(target) => format!("{}/{}?base={}&to={}", self.base_url, segment, base, target),
            None => format!("{}/{}?base={}", self.base_url, segment, base),
        }
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_url() {
        let client = RatesClient::new("https://api.frankfurter.app/").unwrap();
        assert_eq!(
            client.rates_url("latest", "USD", None),
            "https://api.frankfurter.app/latest?base=USD"
        );
        assert_eq!(
            client.rates_url("latest", "USD", Some("INR")),
            "https://api.frankfurter.app/latest?base=USD&to=INR"
        );
        assert_eq!(
            client.rates_url("2024-01-15", "EUR", Some("USD")),
            "https://api.frankfurter.app/2024-01-15?base=EUR&to=USD"
        );
    }

    #[test]
    fn test_base_url_trimmed() {
        let client = RatesClient::new("http://localhost:8080///").unwrap();
        assert_eq!(
            client.rates_url("latest", "USD", None),
            "http://localhost:8080/latest?base=USD"
        );
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code(" usd "), "USD");
        assert_eq!(normalize_code("Inr"), "INR");
    }

    #[test]
    fn test_rate_table_deserialization() {
        let json = r#"{"amount":1.0,"base":"USD","date":"2024-01-15","rates":{"INR":83.11,"EUR":0.92}}"#;
        let table: RateTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.base, "USD");
        assert_eq!(table.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(table.rates["INR"], 83.11);
    }
}
