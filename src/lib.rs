//! # MitraVerify SDK
//!
//! Client for the MitraVerify backend, which checks text for misinformation
//! and images for manipulation.
//!
//! ## Basic Usage Example
//!
//! ```no_run
//! use mitraverify::{format_confidence, Client, Config, UploadFile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Resolve base URL, timeout and upload limit from the environment
//!     let client = Client::new(Config::from_env())?;
//!
//!     let health = client.health_check().await?;
//!     println!("Backend {} ({})", health.status, health.version);
//!
//!     let result = client
//!         .verify_text("Drinking hot water cures every virus")
//!         .await?;
//!     println!(
//!         "Verdict: {} ({})",
//!         result.overall_verdict,
//!         format_confidence(result.confidence)
//!     );
//!
//!     // Text and image together
//!     let image = UploadFile::from_path("./forwarded.jpg").await?;
//!     let result = client
//!         .verify_content(Some("Flooded street in Chennai today"), Some(&image))
//!         .await?;
//!     if let Some(analysis) = result.image_analysis {
//!         println!("Manipulated: {}", analysis.is_manipulated);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Handling Errors
//!
//! ```no_run
//! use mitraverify::{Client, Config, ErrorKind};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new(Config::default()).expect("valid config");
//!
//!     match client.verify_text("   ").await {
//!         Ok(result) => println!("{}", result.overall_verdict),
//!         Err(err) => match err.kind() {
//!             ErrorKind::Validation => println!("Fix your input: {err}"),
//!             ErrorKind::Transport => println!("Network trouble: {err}"),
//!             ErrorKind::Backend => println!("Server said: {err}"),
//!             ErrorKind::Unexpected => println!("Something went wrong: {err}"),
//!         },
//!     }
//! }
//! ```

mod client;
mod config;
mod error;
mod file;
mod format;
mod http;
mod models;
mod utils;

// Re-exports
pub use client::Client;
pub use config::{
    env_vars, Config, Environment, DEFAULT_BASE_URL, DEFAULT_MAX_FILE_SIZE,
    DEFAULT_PRODUCTION_BASE_URL, DEFAULT_TIMEOUT_MS,
};
pub use error::{Error, ErrorKind, Result};
pub use file::{UploadConstraints, UploadFile, ALLOWED_MIME_TYPES};
pub use format::{
    confidence_level, format_confidence, verdict_color, ConfidenceLevel, VerdictTone,
};
pub use models::{
    ApiError, Evidence, HealthStatus, ImageAnalysis, ModelInfo, Probabilities,
    SimilarityMatch, SystemStats, TextAnalysis, VerificationResult,
};
