//! # Breakout Client - Stock Breakout Analysis Client
//!
//! A Rust client for a remote stock-breakout analysis service featuring:
//! - Single-shot analysis request submission over HTTP
//! - CSV report download with an in-memory preview parse
//! - An explicit submission state machine with a loading gate
//!
//! ## Quick Start
//!
//! ```no_run
//! use breakout_client::prelude::*;
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::load();
//!     let request = AnalysisRequest::new(
//!         "aapl",
//!         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
//!         200.0,
//!         2.0,
//!         10,
//!     );
//!     let mut session = SubmissionSession::new(&config);
//!     let state = session.submit(request).await;
//!     println!("Preview rows: {}", state.results.len());
//!     Ok(())
//! }
//! ```

// Core modules - these contain the main functionality
pub mod config;
pub mod models;
pub mod render;
pub mod services;
pub mod state_machine;
pub mod utils;

// Prelude for convenient imports
pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! Import this module to get the most commonly used types:
    //! ```rust
    //! use breakout_client::prelude::*;
    //! ```

    pub use crate::config::ClientConfig;
    pub use crate::models::{AnalysisRequest, TradeRecord};
    pub use crate::services::{AnalysisClient, AnalysisRequestError, ReportBody, ResponsePipeline};
    pub use crate::state_machine::{SessionState, SubmissionSession, SubmissionStatus};
}

// Re-export some commonly used utilities
pub use utils::{init_logger, Logger, Timer};
