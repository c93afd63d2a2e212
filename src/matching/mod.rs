//! Matching and scoring: requirements, job scoring, ranking, ATS heuristics

pub mod ats;
pub mod ranker;
pub mod requirements;
pub mod scorer;

pub use ats::{ATSHeuristicScorer, ATSScorecard};
pub use ranker::CandidateRanker;
pub use requirements::RequirementParser;
pub use scorer::{JobMatch, JobScorer};
