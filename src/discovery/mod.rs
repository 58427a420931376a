//! Post discovery
//!
//! This module turns configured blog homepages into a bounded list of
//! unseen post URLs:
//! - the harvester extracts candidate links from homepage HTML
//! - the classifier decides whether a candidate is a genuine article page
//! - the pipeline combines both with the URL cache, committing non-post
//!   candidates to the cache immediately so they are never re-checked

mod classifier;
mod harvester;
mod pipeline;

pub use classifier::{classify, has_post_path, Classification};
pub use harvester::{harvest, harvest_links};
pub use pipeline::discover;
