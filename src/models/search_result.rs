// file: src/models/search_result.rs
// description: Search result model with call latency
// reference: Used for per-query benchmark results

use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Titles in the order the backend returned them
    pub titles: Vec<String>,

    /// Wall-clock time of the search call, including response decoding
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn new(titles: Vec<String>, elapsed: Duration) -> Self {
        Self { titles, elapsed }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }
}

/// Result of running one query against one backend.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Completed(SearchResult),
    Failed(String),
}

impl QueryOutcome {
    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            QueryOutcome::Completed(result) => Some(result),
            QueryOutcome::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, QueryOutcome::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_result_creation() {
        let result = SearchResult::new(
            vec!["Tech Innovation".to_string(), "Machine Learning".to_string()],
            Duration::from_millis(3),
        );

        assert_eq!(result.len(), 2);
        assert!(result.contains("Machine Learning"));
        assert!(!result.contains("Data Science"));
        assert_eq!(result.elapsed, Duration::from_millis(3));
    }

    #[test]
    fn test_query_outcome_accessors() {
        let ok = QueryOutcome::Completed(SearchResult::new(vec![], Duration::ZERO));
        assert!(!ok.is_failed());
        assert!(ok.result().is_some_and(|r| r.is_empty()));

        let failed = QueryOutcome::Failed("syntax error in tsquery".to_string());
        assert!(failed.is_failed());
        assert!(failed.result().is_none());
    }
}
