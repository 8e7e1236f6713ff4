//! The fact source seam used by the HTTP layer.

use async_trait::async_trait;
use domain::FactOutcome;

/// Something that can produce a fact for a profile response.
///
/// Implementations never fail: every error is folded into a
/// [`FactOutcome`] variant, and every call returns within a bounded time.
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Performs a single lookup. No retries.
    async fn fetch(&self) -> FactOutcome;
}
