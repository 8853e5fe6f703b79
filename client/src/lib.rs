//! Client for the generic write service.
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use common::{Metric, Sample};
//! use generic_write_client::WriteClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WriteClient::new("127.0.0.1:1234", Duration::from_secs(5))?;
//!     let metric: Metric = [("__name__", "up"), ("job", "a")].into_iter().collect();
//!     client.store(&[Sample::new(metric, 1.0, 1_700_000_000_000)]).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod encode;
pub mod error;

pub use client::WriteClient;
pub use encode::encode;
pub use error::ClientError;
