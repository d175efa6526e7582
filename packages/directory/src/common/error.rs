use thiserror::Error;

/// Result type for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Errors surfaced by the listing pipeline.
///
/// Data-integrity problems (a job pointing at a missing project) are not
/// errors: those records are dropped from the listing instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// A project id from a route or deep link does not resolve.
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// A taxonomy must at least contain its "all" sentinel.
    #[error("Taxonomy '{0}' has no tags")]
    EmptyTaxonomy(String),

    #[error("Unknown tag '{value}' in taxonomy '{taxonomy}'")]
    UnknownTag { taxonomy: String, value: String },

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown academy category: {0}")]
    UnknownCategory(String),
}
