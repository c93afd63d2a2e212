//! Dataset aggregates for the insights view

use crate::dataset::repository::DatasetRepository;
use serde::Serialize;
use std::collections::HashMap;

/// Frequency tables over the loaded dataset: job distribution by title,
/// required-skill demand, and candidate education levels. Aggregation only;
/// rendering belongs to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInsights {
    pub top_job_titles: Vec<(String, usize)>,
    pub top_required_skills: Vec<(String, usize)>,
    pub top_education_levels: Vec<(String, usize)>,
}

impl DatasetInsights {
    pub fn compute(repository: &DatasetRepository, limit: usize) -> Self {
        let top_job_titles = top_counts(
            repository.jobs().iter().map(|j| j.title.as_str()),
            limit,
        );

        let top_required_skills = top_counts(
            repository
                .jobs()
                .iter()
                .flat_map(|j| j.required_skills.iter().map(|s| s.as_str())),
            limit,
        );

        let top_education_levels = top_counts(
            repository
                .candidates()
                .iter()
                .map(|c| c.education.as_str())
                .filter(|e| !e.trim().is_empty()),
            limit,
        );

        Self {
            top_job_titles,
            top_required_skills,
            top_education_levels,
        }
    }
}

/// Counts occurrences and returns the top entries, most frequent first,
/// ties broken alphabetically for deterministic output.
fn top_counts<'a>(values: impl Iterator<Item = &'a str>, limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_counts_ordering() {
        let values = ["sql", "python", "sql", "excel", "python", "sql"];
        let counts = top_counts(values.into_iter(), 2);

        assert_eq!(
            counts,
            vec![("sql".to_string(), 3), ("python".to_string(), 2)]
        );
    }

    #[test]
    fn test_ties_broken_alphabetically() {
        let values = ["b", "a", "c", "a", "b", "c"];
        let counts = top_counts(values.into_iter(), 3);

        assert_eq!(
            counts,
            vec![
                ("a".to_string(), 2),
                ("b".to_string(), 2),
                ("c".to_string(), 2)
            ]
        );
    }

    #[test]
    fn test_limit_applied() {
        let values = ["a", "b", "c", "d"];
        assert_eq!(top_counts(values.into_iter(), 2).len(), 2);
    }
}
