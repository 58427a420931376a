/// Post state definitions for tracking per-run progress
use std::fmt;

/// Lifecycle of a discovered post within a single run
///
/// A post advances Discovered → Extracted → Summarized → Published →
/// Cached, or drops to Failed at any step. Failed posts are not cached and
/// are rediscovered on the next run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostState {
    /// Confirmed as a post, waiting to be processed
    Discovered,

    /// Body text extracted from the page
    Extracted,

    /// Structured summary produced
    Summarized,

    /// Document uploaded and results row written
    Published,

    /// Committed to the URL cache; never processed again
    Cached,

    /// A step failed; the post stays out of the cache for retry
    Failed,
}

impl PostState {
    /// Returns true if no further processing happens for this post
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cached | Self::Failed)
    }

    /// Returns true if the post completed the full pipeline
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Cached)
    }
}

impl fmt::Display for PostState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Discovered => "discovered",
            Self::Extracted => "extracted",
            Self::Summarized => "summarized",
            Self::Published => "published",
            Self::Cached => "cached",
            Self::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}
