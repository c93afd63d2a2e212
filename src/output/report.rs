//! Report values handed to the output formatters

use crate::dataset::{CandidateMatch, DatasetInsights, JobPosting};
use crate::extraction::ExtractedProfile;
use crate::matching::{ATSScorecard, JobMatch};
use serde::Serialize;

/// Upload-matching result: the extracted profile plus the best job roles.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub profile: ExtractedProfile,
    pub top_jobs: Vec<JobMatch>,
}

/// Ranking result for a selected job.
#[derive(Debug, Clone, Serialize)]
pub struct RankingReport {
    pub job: JobPosting,
    pub candidates: Vec<CandidateMatch>,
}

/// Any result the CLI can render. Serialized untagged so JSON output is the
/// inner value without a wrapper.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Match(MatchReport),
    Ranking(RankingReport),
    Ats(ATSScorecard),
    Insights(DatasetInsights),
}
