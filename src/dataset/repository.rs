//! Load-once dataset repository

use crate::config::Config;
use crate::dataset::records::{
    CandidateMatch, CandidateRecord, JobPosting, MatchRecord, RawJobRecord,
};
use crate::error::{Result, ResumeMatcherError};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

/// Immutable view over the candidate, job, and precomputed-match tables.
///
/// Built once at process start and passed by reference; requirement cells
/// are decoded during the load so scoring never re-parses strings.
pub struct DatasetRepository {
    candidates: Vec<CandidateRecord>,
    jobs: Vec<JobPosting>,
    matches: Vec<MatchRecord>,
    candidate_index: HashMap<String, usize>,
}

impl DatasetRepository {
    pub fn load(config: &Config) -> Result<Self> {
        Self::load_from_paths(
            &config.candidates_path(),
            &config.jobs_path(),
            &config.matches_path(),
        )
    }

    pub fn load_from_paths(
        candidates_path: &Path,
        jobs_path: &Path,
        matches_path: &Path,
    ) -> Result<Self> {
        let candidates: Vec<CandidateRecord> = read_table(candidates_path)?;
        let raw_jobs: Vec<RawJobRecord> = read_table(jobs_path)?;
        let matches: Vec<MatchRecord> = read_table(matches_path)?;

        let jobs: Vec<JobPosting> = raw_jobs.into_iter().map(JobPosting::from).collect();

        let candidate_index = candidates
            .iter()
            .enumerate()
            .map(|(idx, c)| (c.candidate_id.clone(), idx))
            .collect();

        info!(
            "Loaded dataset: {} candidates, {} jobs, {} match records",
            candidates.len(),
            jobs.len(),
            matches.len()
        );

        Ok(Self {
            candidates,
            jobs,
            matches,
            candidate_index,
        })
    }

    pub fn candidates(&self) -> &[CandidateRecord] {
        &self.candidates
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn match_records(&self) -> &[MatchRecord] {
        &self.matches
    }

    /// Looks a job up by id first, then by exact title.
    pub fn find_job(&self, key: &str) -> Option<&JobPosting> {
        self.jobs
            .iter()
            .find(|j| j.job_id == key)
            .or_else(|| self.jobs.iter().find(|j| j.title == key))
    }

    /// Joins the precomputed match records for a job with their candidate
    /// rows, preserving the match-table order. Records whose candidate is
    /// missing from the candidate table are skipped.
    pub fn matches_for_job(&self, job_id: &str) -> Vec<CandidateMatch> {
        self.matches
            .iter()
            .filter(|m| m.job_id == job_id)
            .filter_map(|m| {
                let Some(&idx) = self.candidate_index.get(&m.candidate_id) else {
                    warn!(
                        "Match record for job {} references unknown candidate {}",
                        m.job_id, m.candidate_id
                    );
                    return None;
                };
                Some(CandidateMatch {
                    candidate: self.candidates[idx].clone(),
                    final_match_score: m.final_match_score,
                    skill_match_percent: m.skill_match_percent,
                    experience_fit_percent: m.experience_fit_percent,
                })
            })
            .collect()
    }
}

fn read_table<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(ResumeMatcherError::Dataset(format!(
            "Dataset file does not exist: {}",
            path.display()
        )));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn fixture_repository(dir: &TempDir) -> DatasetRepository {
        let candidates = write_fixture(
            dir,
            "candidates.csv",
            "CandidateID,Name,Desired Role,Location,Availability,Education,Certifications\n\
             C1,Ana Reyes,Data Analyst,Lisbon,Immediate,M.Sc,AWS CP\n\
             C2,Ben Okafor,Data Engineer,Lagos,2 weeks,B.Sc,None\n",
        );
        let jobs = write_fixture(
            dir,
            "jobs.csv",
            "JobID,Job Title,Company,Industry,Location,Description,Required Skills\n\
             J1,Data Analyst,Acme,Tech,Remote,Dashboards,\"['python', 'sql', 'tableau']\"\n\
             J2,BI Developer,Globex,Finance,Berlin,Reporting,\"???\"\n",
        );
        let matches = write_fixture(
            dir,
            "matches.csv",
            "JobID,CandidateID,Final Match Score,Skill Match %,Experience Fit %\n\
             J1,C1,88.5,90.0,85.0\n\
             J1,C2,76.0,70.0,80.0\n\
             J1,C9,99.0,99.0,99.0\n",
        );

        DatasetRepository::load_from_paths(&candidates, &jobs, &matches).unwrap()
    }

    #[test]
    fn test_load_and_decode() {
        let dir = TempDir::new().unwrap();
        let repo = fixture_repository(&dir);

        assert_eq!(repo.candidates().len(), 2);
        assert_eq!(repo.jobs().len(), 2);
        assert_eq!(
            repo.jobs()[0].required_skills,
            vec!["python", "sql", "tableau"]
        );
        // Malformed requirement cell degrades to empty at load time
        assert!(repo.jobs()[1].required_skills.is_empty());
    }

    #[test]
    fn test_find_job_by_id_and_title() {
        let dir = TempDir::new().unwrap();
        let repo = fixture_repository(&dir);

        assert_eq!(repo.find_job("J2").unwrap().title, "BI Developer");
        assert_eq!(repo.find_job("Data Analyst").unwrap().job_id, "J1");
        assert!(repo.find_job("Nonexistent").is_none());
    }

    #[test]
    fn test_matches_join_skips_unknown_candidates() {
        let dir = TempDir::new().unwrap();
        let repo = fixture_repository(&dir);

        let joined = repo.matches_for_job("J1");
        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0].candidate.name, "Ana Reyes");
        assert_eq!(joined[1].candidate.name, "Ben Okafor");
    }

    #[test]
    fn test_unknown_job_yields_empty() {
        let dir = TempDir::new().unwrap();
        let repo = fixture_repository(&dir);

        assert!(repo.matches_for_job("J9").is_empty());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.csv");
        let result = DatasetRepository::load_from_paths(&missing, &missing, &missing);
        assert!(result.is_err());
    }
}
