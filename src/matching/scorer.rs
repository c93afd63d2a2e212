//! Skill-match scoring of a profile against job requirements

use crate::dataset::records::JobPosting;
use serde::Serialize;
use std::collections::HashSet;

/// One scored job suggestion for an uploaded resume.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobMatch {
    pub title: String,
    pub company: String,
    pub score: f64,
}

/// Computes skill-match percentages. Pure; holds no state.
#[derive(Debug, Default, Clone)]
pub struct JobScorer;

impl JobScorer {
    pub fn new() -> Self {
        Self
    }

    /// `100 × |detected ∩ required| / |required|`, rounded to 2 decimals.
    /// Defined as 0 when the requirement list is empty. Both sides are
    /// lowercased before intersection; always within `[0, 100]`.
    pub fn skill_match_percent(&self, detected: &[String], required: &[String]) -> f64 {
        let required: HashSet<String> = required.iter().map(|s| s.trim().to_lowercase()).collect();
        if required.is_empty() {
            return 0.0;
        }

        let detected: HashSet<String> = detected.iter().map(|s| s.trim().to_lowercase()).collect();
        let matched = detected.intersection(&required).count();

        round2(100.0 * matched as f64 / required.len() as f64)
    }

    /// Scores the detected skills against every job and returns the top
    /// `top_n` by score descending. Ties keep the jobs' original order.
    pub fn best_matches(
        &self,
        detected: &[String],
        jobs: &[JobPosting],
        top_n: usize,
    ) -> Vec<JobMatch> {
        let mut scored: Vec<JobMatch> = jobs
            .iter()
            .map(|job| JobMatch {
                title: job.title.clone(),
                company: job.company.clone(),
                score: self.skill_match_percent(detected, &job.required_skills),
            })
            .collect();

        // Vec::sort_by is stable, preserving dataset order on equal scores
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_n);
        scored
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn job(id: &str, title: &str, required: &[&str]) -> JobPosting {
        JobPosting {
            job_id: id.to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            industry: "Tech".to_string(),
            location: "Remote".to_string(),
            description: String::new(),
            required_skills: skills(required),
            required_experience: None,
        }
    }

    #[test]
    fn test_two_of_three_required() {
        let scorer = JobScorer::new();
        let score = scorer.skill_match_percent(
            &skills(&["python", "sql"]),
            &skills(&["python", "sql", "aws"]),
        );
        assert_eq!(score, 66.67);
    }

    #[test]
    fn test_empty_requirements_score_zero() {
        let scorer = JobScorer::new();
        assert_eq!(scorer.skill_match_percent(&skills(&["python"]), &[]), 0.0);
    }

    #[test]
    fn test_case_insensitive_intersection() {
        let scorer = JobScorer::new();
        let score = scorer.skill_match_percent(&skills(&["Python", "SQL"]), &skills(&["python", "sql"]));
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_score_bounds() {
        let scorer = JobScorer::new();
        let detected = skills(&["python", "sql", "excel", "aws"]);
        let required = skills(&["python", "sql"]);

        let score = scorer.skill_match_percent(&detected, &required);
        assert!((0.0..=100.0).contains(&score));
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_best_matches_top_n() {
        let scorer = JobScorer::new();
        let jobs = vec![
            job("J1", "Analyst", &["python", "sql", "aws"]),
            job("J2", "Engineer", &["python", "sql"]),
            job("J3", "Scientist", &["r"]),
            job("J4", "Consultant", &["python"]),
        ];

        let matches = scorer.best_matches(&skills(&["python", "sql"]), &jobs, 3);

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].title, "Engineer");
        assert_eq!(matches[0].score, 100.0);
        assert_eq!(matches[1].title, "Consultant");
        assert_eq!(matches[2].title, "Analyst");
        assert_eq!(matches[2].score, 66.67);
    }

    #[test]
    fn test_best_matches_ties_are_stable() {
        let scorer = JobScorer::new();
        let jobs = vec![
            job("J1", "First", &["python"]),
            job("J2", "Second", &["python"]),
        ];

        let matches = scorer.best_matches(&skills(&["python"]), &jobs, 2);
        assert_eq!(matches[0].title, "First");
        assert_eq!(matches[1].title, "Second");
    }
}
