use std::env;
use std::path::PathBuf;

/// Default analysis service address when ANALYSIS_API_URL is unset
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

// Holds application-wide settings
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub output_dir: PathBuf,
}

impl ClientConfig {
    // Load all configuration from environment variables
    pub fn load() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let base_url =
            env::var("ANALYSIS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let output_dir = env::var("REPORT_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Self {
            base_url,
            output_dir,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}
