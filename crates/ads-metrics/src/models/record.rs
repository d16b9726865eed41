//! ADS search response and publication records.

use serde::{Deserialize, Serialize};

/// Venue label ADS assigns to arXiv preprints.
pub const UNREFEREED_VENUE: &str = "arXiv e-prints";

/// One document from an ADS search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationRecord {
    /// Number of citations this paper has received.
    pub citation_count: u64,

    /// Number of reads recorded by ADS.
    pub read_count: u64,

    /// Publication venue (journal name, or "arXiv e-prints").
    #[serde(default, rename = "pub")]
    pub publication: Option<String>,

    /// ADS bibcode.
    #[serde(default)]
    pub bibcode: Option<String>,
}

impl PublicationRecord {
    /// Whether this record counts as refereed.
    ///
    /// Only the exact label "arXiv e-prints" is unrefereed; every other
    /// venue, including a missing one, is refereed.
    #[must_use]
    pub fn is_refereed(&self) -> bool {
        self.publication.as_deref() != Some(UNREFEREED_VENUE)
    }
}

/// Top-level search response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Solr response header (status, timing, echoed params).
    #[serde(default)]
    pub response_header: Option<serde_json::Value>,

    /// The result set.
    pub response: SearchResponseBody,
}

/// The `response` body of a search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponseBody {
    /// Total number of matches on the server.
    #[serde(default)]
    pub num_found: u64,

    /// Offset of the first returned document.
    #[serde(default)]
    pub start: u64,

    /// Returned documents.
    #[serde(default)]
    pub docs: Vec<PublicationRecord>,
}
