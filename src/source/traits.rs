use crate::model::{SearchQuery, SourceError};

/// One fragment, or the reason its text could not be materialized. An `Err`
/// item only costs that fragment; the scan continues.
pub type FragmentResult = Result<String, SourceError>;

/// The external producer of raw text fragments for one query. Implementations
/// own their timeout and cancellation; the pipeline never retries them.
#[async_trait::async_trait]
pub trait FragmentSource: Send + Sync {
    /// A finite, ordered sequence of candidate fragments. May be empty.
    /// A top-level `Err` fails the whole scan.
    async fn fragments(&self, query: &SearchQuery) -> Result<Vec<FragmentResult>, SourceError>;
}
