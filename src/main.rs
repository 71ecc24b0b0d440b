use std::path::PathBuf;

use breakout_client::config::ClientConfig;
use breakout_client::models::AnalysisRequest;
use breakout_client::render;
use breakout_client::state_machine::SubmissionSession;
use breakout_client::utils::init_logger;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "breakout-client")]
#[command(about = "A CLI for stock breakout analysis: submits parameters to the analysis service and renders the CSV trade report")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one breakout analysis and save the returned report
    Analyze {
        /// Stock ticker (e.g., AAPL); uppercased before submission
        #[arg(short, long, value_parser = parse_ticker)]
        ticker: String,
        /// Start of the analysis date range (YYYY-MM-DD)
        #[arg(long)]
        start_date: NaiveDate,
        /// End of the analysis date range (YYYY-MM-DD)
        #[arg(long)]
        end_date: NaiveDate,
        /// Volume threshold (%)
        #[arg(long, default_value_t = 200.0)]
        volume_threshold: f64,
        /// Price change threshold (%)
        #[arg(long, default_value_t = 2.0)]
        price_threshold: f64,
        /// Holding period in days
        #[arg(long, default_value_t = 10)]
        holding_period: u32,
        /// Directory for the downloaded report (overrides REPORT_OUTPUT_DIR)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

fn parse_ticker(value: &str) -> Result<String, String> {
    let ticker = value.trim();
    if ticker.is_empty() {
        return Err("ticker must not be empty".to_string());
    }
    Ok(ticker.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            ticker,
            start_date,
            end_date,
            volume_threshold,
            price_threshold,
            holding_period,
            output_dir,
        } => {
            let mut config = ClientConfig::load();
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }

            let request = AnalysisRequest::new(
                &ticker,
                start_date,
                end_date,
                volume_threshold,
                price_threshold,
                holding_period,
            );

            let mut session = SubmissionSession::new(&config);
            let state = session.submit(request).await;

            if let Some(error) = &state.error {
                eprintln!("Error: {}", error);
                std::process::exit(1);
            }

            if let Some(path) = &state.saved_report {
                println!("Report saved to {}", path.display());
            }

            if let Some(table) = render::render_preview(&state.results) {
                println!("{}", table);
            }
        }
    }

    Ok(())
}
