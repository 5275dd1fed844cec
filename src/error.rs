use thiserror::Error;

/// Failures surfaced by the tree provider. Coordinate-reconciliation gaps
/// never appear here: a marker that cannot be mapped to the requested build
/// is dropped from the tree instance instead.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The network fetch did not complete. No retry is attempted; callers
    /// wanting one wrap `load_tree` themselves.
    #[error("failed to fetch haplogroup tree from {url}")]
    FetchFailure {
        url: String,
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The raw payload could not be interpreted as a haplogroup tree. The
    /// cached payload is retained so a corrected parser can reuse it.
    #[error("failed to parse haplogroup tree: {message}")]
    ParseFailure { message: String },

    #[error("tree cache error")]
    Cache(#[from] std::io::Error),
}
