use std::io;

use thiserror::Error;

// user-input errors, surfaced before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some keywords to search for.")]
    EmptyKeywords,
    #[error("Please select at least one category.")]
    NoCategories,
    #[error("Unknown category: {0}")]
    UnknownCategory(String)
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to parse feed: {0}")]
    Parse(#[from] quick_xml::de::DeError)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: String, value: String }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error)
}
