use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::{API, DF};
use crate::domain::{PriceSeries, Sample};
use crate::error::DashboardError;

/// Abstract interface for fetching closing-price history.
#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Fetch the full available history for a symbol, sorted ascending by
    /// date. Symbols arrive already trimmed and uppercased.
    async fn fetch_history(&self, symbol: &str) -> Result<PriceSeries>;
}

/// Wire shape of the backend response.
///
/// The body carries other fields (summary, fundamentals); only `Close`
/// matters here and the rest is dropped on decode.
#[derive(Debug, Deserialize)]
struct HistoryPayload {
    #[serde(rename = "Close")]
    close: HashMap<String, f64>,
}

fn parse_history(payload: HistoryPayload) -> Result<PriceSeries, DashboardError> {
    let mut samples = Vec::with_capacity(payload.close.len());
    for (date_str, price) in payload.close {
        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
            DashboardError::Fetch(format!("bad date key {:?} in Close map: {}", date_str, e))
        })?;
        samples.push(Sample::new(date, price));
    }

    // Key iteration order is whatever the JSON decoder gives us. Ordering
    // comes from the sort inside from_unordered, never from the wire.
    let series = PriceSeries::from_unordered(samples);

    if DF.log_parse {
        if let (Some(first), Some(last)) = (series.first(), series.last()) {
            log::debug!(
                "parsed {} samples spanning {} to {}",
                series.len(),
                first.date,
                last.date
            );
        }
    }
    Ok(series)
}

pub struct HttpProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl PriceHistoryProvider for HttpProvider {
    async fn fetch_history(&self, symbol: &str) -> Result<PriceSeries> {
        let url = format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            API.history_path,
            symbol
        );
        if DF.log_fetch {
            log::debug!("fetch_history | url: {}", url);
        }

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Fetch(format!("{} returned {}", url, status)).into());
        }

        let payload: HistoryPayload = response
            .json()
            .await
            .map_err(|e| DashboardError::Fetch(format!("malformed body: {}", e)))?;

        Ok(parse_history(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_from(json: serde_json::Value) -> Result<HistoryPayload, serde_json::Error> {
        serde_json::from_value(json)
    }

    #[test]
    fn test_parse_aapl_scenario() {
        let payload = payload_from(serde_json::json!({
            "Close": { "2024-01-01": 150.0, "2024-01-02": 155.0 },
            "summary": "ignored junk"
        }))
        .unwrap();

        let series = parse_history(payload).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.first().unwrap().price, 150.0);
        assert_eq!(series.last().unwrap().price, 155.0);
    }

    #[test]
    fn test_parse_sorts_out_of_order_keys() {
        // HashMap decode scrambles key order anyway; feed dates reversed to
        // make the intent explicit.
        let payload = payload_from(serde_json::json!({
            "Close": {
                "2024-03-05": 90.0,
                "2024-03-01": 100.0,
                "2024-03-03": 110.0
            }
        }))
        .unwrap();

        let series = parse_history(payload).unwrap();
        let prices: Vec<f64> = series.samples().iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![100.0, 110.0, 90.0]);
    }

    #[test]
    fn test_parse_rejects_bad_date_key() {
        let payload = payload_from(serde_json::json!({
            "Close": { "not-a-date": 10.0 }
        }))
        .unwrap();

        let err = parse_history(payload).unwrap_err();
        assert!(matches!(err, DashboardError::Fetch(_)));
    }

    #[test]
    fn test_missing_close_field_fails_decode() {
        let result = payload_from(serde_json::json!({ "summary": "no prices here" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_close_map_is_an_empty_series() {
        let payload = payload_from(serde_json::json!({ "Close": {} })).unwrap();
        let series = parse_history(payload).unwrap();
        assert!(series.is_empty());
    }
}
