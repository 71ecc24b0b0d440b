use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::models::TradeRecord;
use crate::services::{extract_trade_list, ReportBody};
use crate::utils::Logger;

/// What one successful response produces: a saved file and the preview rows
#[derive(Debug)]
pub struct PipelineOutcome {
    pub saved_path: PathBuf,
    pub trades: Vec<TradeRecord>,
}

/// Converts one successful response into a local report file and a preview
/// table, without a second network request: the download and the text parse
/// are two projections of the same in-memory body.
pub struct ResponsePipeline {
    output_dir: PathBuf,
    logger: Logger,
}

impl ResponsePipeline {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            logger: Logger::new("RESPONSE_PIPELINE"),
        }
    }

    /// Save the report under `{ticker}_analysis.csv` and extract the trade
    /// list. The ticker comes from the original request (already uppercased),
    /// never from the body.
    pub fn process(&self, ticker: &str, report: &ReportBody) -> anyhow::Result<PipelineOutcome> {
        let file_name = format!("{}_analysis.csv", ticker);
        let saved_path = self.output_dir.join(&file_name);

        self.save_report(&saved_path, report)?;
        self.logger.info(&format!(
            "Report saved: {} ({} bytes)",
            saved_path.display(),
            report.len()
        ));

        let text = report.as_text();
        let trades = extract_trade_list(&text);
        self.logger.info(&format!(
            "Preview parsed: {} trade rows for {}",
            trades.len(),
            ticker
        ));

        Ok(PipelineOutcome { saved_path, trades })
    }

    fn save_report(&self, path: &Path, report: &ReportBody) -> anyhow::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(report.as_bytes())?;
        file.sync_all()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "Breakout Analysis Report\n\
        Detailed Trade List\n\
        Date,Entry_Price,Exit_Price,Volume_Ratio,Daily_Return,Total_Return\n\
        2024-01-05,100.00,102.50,2.30,2.50,2.50\n";

    #[test]
    fn test_process_saves_and_parses() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = ResponsePipeline::new(dir.path());
        let body = ReportBody::new(REPORT.as_bytes().to_vec());

        let outcome = pipeline.process("AAPL", &body).unwrap();

        assert_eq!(
            outcome.saved_path.file_name().unwrap().to_str().unwrap(),
            "AAPL_analysis.csv"
        );
        let saved = std::fs::read(&outcome.saved_path).unwrap();
        assert_eq!(saved, REPORT.as_bytes());
        assert_eq!(outcome.trades.len(), 1);
        assert_eq!(outcome.trades[0].date, "2024-01-05");
    }

    #[test]
    fn test_process_without_marker_saves_empty_preview() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = ResponsePipeline::new(dir.path());
        let body = ReportBody::new(b"No trades this period\n".to_vec());

        let outcome = pipeline.process("MSFT", &body).unwrap();

        assert!(outcome.saved_path.exists());
        assert!(outcome.trades.is_empty());
    }
}
