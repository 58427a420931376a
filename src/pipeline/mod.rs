//! Run orchestration
//!
//! Drives the full per-run sequence: discovery, then per-post extraction,
//! summarization, publication, and finally the cache commit. The
//! publish-then-cache ordering is the core trade-off of the system: a crash
//! between publish and cache commit causes a duplicate publish on retry
//! (visible, correctable), whereas caching first would silently lose a post.

mod orchestrator;
mod state;

pub use orchestrator::{Orchestrator, RunSummary};
pub use state::PostState;
