use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::models::AnalysisRequest;
use crate::services::ReportBody;
use crate::utils::{Logger, Timer};

/// Fallback message when the service reports a failure without a usable detail
pub const SERVICE_ERROR_FALLBACK: &str = "Analysis failed";

#[derive(Debug, Error)]
pub enum AnalysisRequestError {
    /// Non-2xx response; carries the service's detail message or the fallback
    #[error("{0}")]
    Service(String),
    /// The call failed before a response was obtained
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Structured error payload returned by the service on non-2xx responses.
/// A missing `detail` field deserializes to an empty string, which maps to
/// the fallback message just like an unparseable body.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    detail: String,
}

/// Request submitter for the remote analysis service.
///
/// Issues exactly one outbound call per invocation: no retries, no explicit
/// timeout beyond the transport defaults. Case normalization and numeric
/// coercion are the caller's job (`AnalysisRequest::new` does both).
pub struct AnalysisClient {
    client: Client,
    base_url: String,
    logger: Logger,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            logger: Logger::new("ANALYSIS_CLIENT"),
        }
    }

    /// Submit an analysis request and return the raw report body.
    ///
    /// On 2xx the full body is read once into memory and handed back
    /// uninterpreted; the response pipeline owns both the download and the
    /// preview parse. On non-2xx the body is read as an [`ErrorPayload`] and
    /// the call fails with its message.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<ReportBody, AnalysisRequestError> {
        let url = format!("{}/api/analyze", self.base_url.trim_end_matches('/'));

        self.logger.info(&format!(
            "Submitting analysis request for {} ({} to {})",
            request.ticker, request.start_date, request.end_date
        ));

        let timer = Timer::start(&format!("{} analysis request", request.ticker));
        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = match response.json::<ErrorPayload>().await {
                Ok(payload) if !payload.detail.is_empty() => payload.detail,
                _ => SERVICE_ERROR_FALLBACK.to_string(),
            };
            self.logger.warn(&format!(
                "Analysis request for {} failed: HTTP {} ({})",
                request.ticker, status, message
            ));
            return Err(AnalysisRequestError::Service(message));
        }

        let bytes = response.bytes().await?;
        timer.log_elapsed();
        self.logger.info(&format!(
            "Received report for {}: {} bytes",
            request.ticker,
            bytes.len()
        ));

        Ok(ReportBody::new(bytes.to_vec()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
