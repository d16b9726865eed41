//! ADS Metrics
//!
//! Totals citations, reads and refereed papers for one author using the
//! NASA Astrophysics Data System (ADS) search API.
//!
//! # Features
//!
//! - **One query**: a single authenticated search per lookup
//! - **Explicit session**: the token builds an [`AdsClient`]; no global state
//! - **Testable seams**: [`client::Connector`] and [`client::SearchService`]
//!
//! # Example
//!
//! ```no_run
//! use ads_metrics::{Config, MetricsAggregator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let aggregator = MetricsAggregator::new(
//!         "Lacaille, K",
//!         vec!["citation_count".into(), "read_count".into(), "pub".into()],
//!     );
//!     let totals = aggregator.collect_metrics(&Config::default()).await?;
//!     let (_citations, _reads, _refereed) = totals.as_tuple();
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use aggregator::{AggregateResult, MetricsAggregator};
pub use client::AdsClient;
pub use config::Config;
pub use error::{ClientError, MetricsError};
