//! Failure taxonomy for the extraction half of the pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Network or HTTP-status failure. Never retried.
    #[error("failed to fetch draft page for {year} from {url}")]
    Transport {
        year: i32,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page parsed, but no table had both a player and a college column.
    #[error("no draft tables found for {year} at {url}")]
    NotFound { year: i32, url: String },

    /// A draft table matched, yet none of the aliases for a required column did.
    #[error("draft tables have no {role} column (columns: {})", .columns.join(", "))]
    MissingColumn {
        role: &'static str,
        columns: Vec<String>,
    },

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}
