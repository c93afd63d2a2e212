//! Canonical skill taxonomy

use std::collections::HashSet;

/// Fixed reference set of canonical skill names used for exact-match
/// detection. Entries are lowercase and whitespace-trimmed; immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct SkillTaxonomy {
    entries: HashSet<String>,
    max_phrase_tokens: usize,
}

impl SkillTaxonomy {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: HashSet<String> = entries
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let max_phrase_tokens = entries
            .iter()
            .map(|e| e.split_whitespace().count())
            .max()
            .unwrap_or(0);

        Self {
            entries,
            max_phrase_tokens,
        }
    }

    /// Reference taxonomy for data and analytics roles.
    pub fn data_roles() -> Self {
        Self::from_entries([
            // Programming & data science
            "python",
            "r",
            "java",
            "c++",
            "c#",
            "javascript",
            "sql",
            "pandas",
            "numpy",
            "matplotlib",
            "scikit-learn",
            "tensorflow",
            "pytorch",
            "machine learning",
            "deep learning",
            "natural language processing",
            "nlp",
            "computer vision",
            "data structures",
            "algorithms",
            // Data engineering & BI tools
            "big data",
            "hadoop",
            "spark",
            "airflow",
            "power bi",
            "tableau",
            "excel",
            "google analytics",
            // Cloud & DevOps
            "aws",
            "azure",
            "gcp",
            "docker",
            "kubernetes",
            "git",
            "ci/cd",
            // Business & analytics
            "business intelligence",
            "stakeholder communication",
            "data visualization",
            "a/b testing",
            "data storytelling",
            "agile",
            "scrum",
        ])
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.contains(phrase)
    }

    /// Longest entry measured in whitespace-separated tokens.
    pub fn max_phrase_tokens(&self) -> usize {
        self.max_phrase_tokens
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_roles_taxonomy() {
        let taxonomy = SkillTaxonomy::data_roles();

        assert!(taxonomy.contains("python"));
        assert!(taxonomy.contains("machine learning"));
        assert!(taxonomy.contains("ci/cd"));
        assert!(!taxonomy.contains("underwater basket weaving"));
    }

    #[test]
    fn test_iter_yields_normalized_entries() {
        let taxonomy = SkillTaxonomy::data_roles();

        assert_eq!(taxonomy.iter().count(), taxonomy.len());
        assert!(taxonomy
            .iter()
            .all(|s| !s.is_empty() && s.trim() == s && s.to_lowercase() == s));
    }

    #[test]
    fn test_entries_normalized() {
        let taxonomy = SkillTaxonomy::from_entries(["  Python ", "SQL", ""]);

        assert_eq!(taxonomy.len(), 2);
        assert!(taxonomy.contains("python"));
        assert!(taxonomy.contains("sql"));
    }

    #[test]
    fn test_max_phrase_tokens() {
        let taxonomy = SkillTaxonomy::data_roles();
        // "natural language processing" is three tokens
        assert_eq!(taxonomy.max_phrase_tokens(), 3);
    }
}
