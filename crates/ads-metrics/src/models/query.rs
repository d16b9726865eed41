//! Outgoing search request and the bearer token that authorizes it.

use std::fmt;

/// An ADS API token read from the development key file.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Build a token from the raw contents of a key file, dropping exactly
    /// one trailing newline.
    #[must_use]
    pub fn from_file_contents(contents: &str) -> Self {
        Self(contents.strip_suffix('\n').unwrap_or(contents).to_string())
    }

    /// The token text.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for ApiToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiToken").field(&"<redacted>").finish()
    }
}

/// A single ADS search.
///
/// `fl` holds field groups: the aggregator always sends its requested
/// metrics as one nested group, mirroring `fl=[metrics]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Author filter in "Last, F" form.
    pub author: String,

    /// Requested field groups.
    pub fl: Vec<Vec<String>>,
}

impl SearchQuery {
    /// Query for `author` with `fields` passed as a single nested group.
    #[must_use]
    pub fn by_author(author: &str, fields: &[String]) -> Self {
        Self {
            author: author.to_string(),
            fl: vec![fields.to_vec()],
        }
    }

    /// The `q` parameter: `author:"<author>"`.
    #[must_use]
    pub fn q(&self) -> String {
        format!("author:\"{}\"", self.author)
    }

    /// One `fl` value per group, each group comma-joined.
    #[must_use]
    pub fn fl_params(&self) -> Vec<String> {
        self.fl.iter().map(|group| group.join(",")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_strips_one_newline() {
        assert_eq!(ApiToken::from_file_contents("abc\n").expose(), "abc");
        assert_eq!(ApiToken::from_file_contents("abc\n\n").expose(), "abc\n");
        assert_eq!(ApiToken::from_file_contents("abc").expose(), "abc");
        assert_eq!(ApiToken::from_file_contents("a\nb\n").expose(), "a\nb");
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = ApiToken::from("super-secret".to_string());
        assert!(!format!("{token:?}").contains("super-secret"));
    }

    #[test]
    fn test_query_single_nested_group() {
        let fields = vec!["citation_count".to_string(), "read_count".to_string()];
        let query = SearchQuery::by_author("Lacaille, K", &fields);
        assert_eq!(query.fl, vec![fields]);
        assert_eq!(query.q(), "author:\"Lacaille, K\"");
        assert_eq!(
            query.fl_params(),
            vec!["citation_count,read_count".to_string()]
        );
    }
}
