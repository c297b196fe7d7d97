//! Feeding resource: repository seam and application service.

pub mod repository;
pub mod service;

pub use repository::{FeedingRepository, SeaOrmFeedingRepository};
pub use service::FeedingService;

/// How a whole-record replace ended at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    /// No row matched the key when the update ran.
    Conflict,
}
