// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{BenchError, Result};

/// PostgreSQL truncates identifiers longer than this.
const MAX_SQL_IDENTIFIER_LEN: usize = 63;

const INDEX_NAME_FORBIDDEN: &[char] = &['\\', '/', '*', '?', '"', '<', '>', '|', ',', '#', ':', ' '];

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(BenchError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    /// Table, index and text-search configuration names are spliced into SQL,
    /// so only plain unquoted identifiers are accepted.
    pub fn validate_sql_identifier(name: &str) -> Result<()> {
        let mut chars = name.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');

        if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(BenchError::Validation(format!(
                "Invalid SQL identifier: {:?}",
                name
            )));
        }

        if name.len() > MAX_SQL_IDENTIFIER_LEN {
            return Err(BenchError::Validation(format!(
                "SQL identifier too long (max {}): {}",
                MAX_SQL_IDENTIFIER_LEN, name
            )));
        }

        Ok(())
    }

    pub fn validate_index_name(name: &str) -> Result<()> {
        if name.is_empty() || name == "." || name == ".." {
            return Err(BenchError::Validation(format!(
                "Invalid index name: {:?}",
                name
            )));
        }

        if name.starts_with(['-', '_', '+']) {
            return Err(BenchError::Validation(format!(
                "Index name must not start with '-', '_' or '+': {}",
                name
            )));
        }

        if name.chars().any(|c| c.is_uppercase() || INDEX_NAME_FORBIDDEN.contains(&c)) {
            return Err(BenchError::Validation(format!(
                "Index name must be lowercase without special characters: {}",
                name
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://example.com").is_ok());
        assert!(Validator::validate_url("http://localhost:9200").is_ok());
        assert!(Validator::validate_url("localhost:9200").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_sql_identifier() {
        assert!(Validator::validate_sql_identifier("documents").is_ok());
        assert!(Validator::validate_sql_identifier("_idx_fts2").is_ok());
        assert!(Validator::validate_sql_identifier("").is_err());
        assert!(Validator::validate_sql_identifier("2docs").is_err());
        assert!(Validator::validate_sql_identifier("docs; DROP TABLE x").is_err());
        assert!(Validator::validate_sql_identifier("public.docs").is_err());
        assert!(Validator::validate_sql_identifier(&"a".repeat(64)).is_err());
    }

    #[test]
    fn test_validate_index_name() {
        assert!(Validator::validate_index_name("documents").is_ok());
        assert!(Validator::validate_index_name("bench-docs.v1").is_ok());
        assert!(Validator::validate_index_name("Documents").is_err());
        assert!(Validator::validate_index_name("_docs").is_err());
        assert!(Validator::validate_index_name("docs/1").is_err());
        assert!(Validator::validate_index_name("..").is_err());
    }
}
