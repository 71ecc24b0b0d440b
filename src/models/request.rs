use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameter set submitted to the analysis service.
///
/// Serialized as JSON with exactly these field names; the wire contract is
/// `POST {base_url}/api/analyze`. The request is built fresh per submission
/// and never mutated after send. Semantic validation (end date after start
/// date, ticker exists) is the service's job, not the client's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub ticker: String,
    pub start_date: String,
    pub end_date: String,
    pub volume_threshold: f64,
    pub price_threshold: f64,
    pub holding_period: u32,
}

impl AnalysisRequest {
    /// Build a request with the ticker uppercased and dates formatted as
    /// YYYY-MM-DD. Downstream code relies on the ticker already being
    /// normalized here, including the report filename.
    pub fn new(
        ticker: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        volume_threshold: f64,
        price_threshold: f64,
        holding_period: u32,
    ) -> Self {
        Self {
            ticker: ticker.trim().to_uppercase(),
            start_date: start_date.format("%Y-%m-%d").to_string(),
            end_date: end_date.format("%Y-%m-%d").to_string(),
            volume_threshold,
            price_threshold,
            holding_period,
        }
    }
}
