//! Author metrics aggregation: citations, reads and refereed papers.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::client::{Connector, SearchService};
use crate::config::api;
use crate::error::{ClientError, MetricsError, MetricsResult};
use crate::models::{ApiToken, PublicationRecord, SearchQuery};

/// Totals for one author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    /// Sum of citation counts over all papers.
    pub total_citations: u64,
    /// Sum of read counts over all papers.
    pub total_reads: u64,
    /// Papers whose venue is not "arXiv e-prints".
    pub refereed_count: u64,
}

impl AggregateResult {
    /// Reduce a materialized record list in a single pass.
    ///
    /// Sums saturate at `u64::MAX`.
    #[must_use]
    pub fn from_records(records: &[PublicationRecord]) -> Self {
        let mut total_citations: u64 = 0;
        let mut total_reads: u64 = 0;
        let mut unrefereed: u64 = 0;

        for record in records {
            total_citations = total_citations.saturating_add(record.citation_count);
            total_reads = total_reads.saturating_add(record.read_count);
            if !record.is_refereed() {
                unrefereed += 1;
            }
        }

        Self {
            total_citations,
            total_reads,
            refereed_count: records.len() as u64 - unrefereed,
        }
    }

    /// `(total_citations, total_reads, refereed_count)`.
    #[must_use]
    pub const fn as_tuple(&self) -> (u64, u64, u64) {
        (self.total_citations, self.total_reads, self.refereed_count)
    }
}

impl From<AggregateResult> for (u64, u64, u64) {
    fn from(result: AggregateResult) -> Self {
        result.as_tuple()
    }
}

impl fmt::Display for AggregateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total citations is {} Total reads is {} Total refereed papers is {}",
            self.total_citations, self.total_reads, self.refereed_count
        )
    }
}

/// Looks up one author's papers on ADS and totals them.
#[derive(Debug, Clone)]
pub struct MetricsAggregator {
    author: String,
    metrics: Vec<String>,
    key_file: PathBuf,
}

impl MetricsAggregator {
    /// Create an aggregator for `author` ("Last, F") requesting `metrics`.
    #[must_use]
    pub fn new(author: impl Into<String>, metrics: Vec<String>) -> Self {
        Self {
            author: author.into(),
            metrics,
            key_file: PathBuf::from(api::KEY_FILE),
        }
    }

    /// Create an aggregator from untyped JSON input.
    ///
    /// Checks run in order: the author must be a string, the metrics must be
    /// an array, then each metric must be a string.
    pub fn from_values(author: &Value, metrics: &Value) -> MetricsResult<Self> {
        let Value::String(author) = author else {
            return Err(MetricsError::invalid_argument("author name", author, "string"));
        };
        let Value::Array(items) = metrics else {
            return Err(MetricsError::invalid_argument("requested metrics", metrics, "list"));
        };

        let metrics = items
            .iter()
            .map(|item| match item {
                Value::String(metric) => Ok(metric.clone()),
                other => Err(MetricsError::invalid_argument("requested metric", other, "string")),
            })
            .collect::<MetricsResult<Vec<_>>>()?;

        Ok(Self::new(author.clone(), metrics))
    }

    /// Read the token from `path` instead of `ADS_DEV_KEY.txt`.
    #[must_use]
    pub fn with_key_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.key_file = path.into();
        self
    }

    /// Author being looked up.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Requested fields, in order.
    #[must_use]
    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    /// Credential file location.
    #[must_use]
    pub fn key_file(&self) -> &Path {
        &self.key_file
    }

    /// Query ADS for every paper by the author and total the results.
    ///
    /// Prints the summary line to stdout before returning it. The key file
    /// is checked before `connector` is touched.
    pub async fn collect_metrics<C: Connector>(
        &self,
        connector: &C,
    ) -> MetricsResult<AggregateResult> {
        let token = load_token(&self.key_file)?;
        let service = match connector.connect(token) {
            Ok(service) => service,
            Err(ClientError::InvalidToken(source)) => {
                return Err(MetricsError::invalid_credential(&self.key_file, source));
            }
            Err(other) => return Err(other.into()),
        };

        let query = SearchQuery::by_author(&self.author, &self.metrics);
        let records = service.search(&query).await?;

        let result = AggregateResult::from_records(&records);
        tracing::info!(
            author = %self.author,
            papers = records.len(),
            total_citations = result.total_citations,
            total_reads = result.total_reads,
            refereed = result.refereed_count,
            "Collected ADS metrics"
        );

        println!("{result}");
        Ok(result)
    }
}

/// Read the development key, failing if the file is missing.
pub fn load_token(path: &Path) -> MetricsResult<ApiToken> {
    if !path.is_file() {
        return Err(MetricsError::credential_not_found(path));
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|source| MetricsError::credential_unreadable(path, source))?;

    Ok(ApiToken::from_file_contents(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(citations: u64, reads: u64, venue: &str) -> PublicationRecord {
        PublicationRecord {
            citation_count: citations,
            read_count: reads,
            publication: Some(venue.to_string()),
            bibcode: None,
        }
    }

    fn invalid_role(err: &MetricsError) -> Option<&'static str> {
        match err {
            MetricsError::InvalidArgument { role, .. } => Some(*role),
            _ => None,
        }
    }

    #[test]
    fn test_reduce_empty() {
        let result = AggregateResult::from_records(&[]);
        assert_eq!(result.as_tuple(), (0, 0, 0));
    }

    #[test]
    fn test_reduce_mixed_venues() {
        let records = vec![
            record(5, 10, "A Journal"),
            record(0, 1, "arXiv e-prints"),
            record(2, 3, "arXiv e-prints"),
        ];
        let result = AggregateResult::from_records(&records);
        assert_eq!(result.as_tuple(), (7, 14, 1));
    }

    #[test]
    fn test_reduce_saturates_on_huge_counts() {
        let records = vec![
            record(u64::MAX, 1, "A Journal"),
            record(u64::MAX, u64::MAX, "arXiv e-prints"),
        ];
        let result = AggregateResult::from_records(&records);
        assert_eq!(result.as_tuple(), (u64::MAX, u64::MAX, 1));
    }

    #[test]
    fn test_missing_venue_is_refereed() {
        let records = vec![PublicationRecord {
            citation_count: 1,
            read_count: 2,
            ..Default::default()
        }];
        let result = AggregateResult::from_records(&records);
        assert_eq!(result.refereed_count, 1);
    }

    #[test]
    fn test_display_line() {
        let result = AggregateResult {
            total_citations: 7,
            total_reads: 14,
            refereed_count: 1,
        };
        assert_eq!(
            result.to_string(),
            "Total citations is 7 Total reads is 14 Total refereed papers is 1"
        );
        let tuple: (u64, u64, u64) = result.into();
        assert_eq!(tuple, (7, 14, 1));
    }

    #[test]
    fn test_new_defaults_key_file() {
        let agg = MetricsAggregator::new("Lacaille, K", vec!["pub".to_string()]);
        assert_eq!(agg.author(), "Lacaille, K");
        assert_eq!(agg.metrics(), &["pub".to_string()]);
        assert_eq!(agg.key_file(), Path::new("ADS_DEV_KEY.txt"));
    }

    #[test]
    fn test_from_values_accepts_strings() {
        let metrics = json!(["citation_count", "citation_count"]);
        let agg = MetricsAggregator::from_values(&json!("A, B"), &metrics);
        assert_eq!(agg.unwrap().metrics().len(), 2);
    }

    #[test]
    fn test_from_values_checks_author_first() {
        let err = MetricsAggregator::from_values(&json!(1), &json!(2));
        assert_eq!(invalid_role(&err.unwrap_err()), Some("author name"));
    }

    #[test]
    fn test_from_values_rejects_non_list() {
        let err = MetricsAggregator::from_values(&json!("A, B"), &json!("pub"));
        assert_eq!(invalid_role(&err.unwrap_err()), Some("requested metrics"));
    }

    #[test]
    fn test_from_values_reports_first_bad_element() {
        let metrics = json!(["pub", 3, null]);
        let err = MetricsAggregator::from_values(&json!("A, B"), &metrics);
        match err.unwrap_err() {
            MetricsError::InvalidArgument { role, value, .. } => {
                assert_eq!(role, "requested metric");
                assert_eq!(value, "3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_token_missing_file() {
        let path = Path::new("definitely/not/here/ADS_DEV_KEY.txt");
        let err = load_token(path).unwrap_err();
        assert!(matches!(err, MetricsError::CredentialNotFound { .. }));
    }

    struct PanickingConnector;

    impl Connector for PanickingConnector {
        type Service = crate::client::AdsClient;

        fn connect(&self, _token: ApiToken) -> crate::error::ClientResult<Self::Service> {
            panic!("connector must not be reached without a key file");
        }
    }

    #[test]
    fn test_collect_without_key_never_connects() {
        let agg = MetricsAggregator::new("Lacaille, K", vec![])
            .with_key_file("definitely/not/here/ADS_DEV_KEY.txt");
        let result = tokio_test::block_on(agg.collect_metrics(&PanickingConnector));
        let err = result.unwrap_err();
        assert!(matches!(err, MetricsError::CredentialNotFound { .. }));
    }

    #[test]
    fn test_load_token_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_token(dir.path()).unwrap_err();
        assert!(matches!(err, MetricsError::CredentialNotFound { .. }));
    }
}
