//! Dataset loading and the immutable repository

pub mod insights;
pub mod records;
pub mod repository;

pub use insights::DatasetInsights;
pub use records::{CandidateMatch, CandidateRecord, JobPosting, MatchRecord};
pub use repository::DatasetRepository;
