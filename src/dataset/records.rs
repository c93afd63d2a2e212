//! Row types for the candidate, job, and match CSV tables

use crate::matching::requirements::RequirementParser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(rename = "CandidateID")]
    pub candidate_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Desired Role")]
    pub desired_role: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Availability")]
    pub availability: String,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Certifications")]
    pub certifications: String,
}

/// Job row as it appears on disk; the requirement cell is still serialized.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawJobRecord {
    #[serde(rename = "JobID")]
    pub job_id: String,
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Industry")]
    pub industry: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Required Skills", default)]
    pub required_skills: Option<String>,
    #[serde(rename = "Required Experience", default)]
    pub required_experience: Option<String>,
}

/// Job posting with requirements decoded into canonical skill lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub industry: String,
    pub location: String,
    pub description: String,
    /// Decoded once at load; empty when the source cell was malformed.
    pub required_skills: Vec<String>,
    /// Informational only; never scored.
    pub required_experience: Option<String>,
}

impl From<RawJobRecord> for JobPosting {
    fn from(raw: RawJobRecord) -> Self {
        let required_skills = RequirementParser::decode(raw.required_skills.as_deref());
        Self {
            job_id: raw.job_id,
            title: raw.title,
            company: raw.company,
            industry: raw.industry,
            location: raw.location,
            description: raw.description,
            required_skills,
            required_experience: raw.required_experience,
        }
    }
}

/// Precomputed match scores, passed through unchanged by the ranking path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "JobID")]
    pub job_id: String,
    #[serde(rename = "CandidateID")]
    pub candidate_id: String,
    #[serde(rename = "Final Match Score")]
    pub final_match_score: f64,
    #[serde(rename = "Skill Match %")]
    pub skill_match_percent: f64,
    #[serde(rename = "Experience Fit %")]
    pub experience_fit_percent: f64,
}

/// A match record joined with its candidate row, ready for ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateMatch {
    pub candidate: CandidateRecord,
    pub final_match_score: f64,
    pub skill_match_percent: f64,
    pub experience_fit_percent: f64,
}
