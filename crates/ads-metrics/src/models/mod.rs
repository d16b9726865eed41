//! Data models for ADS search requests and responses.
//!
//! Response models use `#[serde(default)]` for fields ADS may omit and
//! keep the API's snake_case names.

mod query;
mod record;

pub use query::{ApiToken, SearchQuery};
pub use record::{PublicationRecord, SearchResponse, SearchResponseBody, UNREFEREED_VENUE};
