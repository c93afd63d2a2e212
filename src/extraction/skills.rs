//! Skill detection against the taxonomy

use crate::extraction::taxonomy::SkillTaxonomy;
use std::collections::HashSet;

/// Detects taxonomy skills in a token sequence.
///
/// Multi-word entries are found with a sliding window over adjacent tokens
/// (up to the longest phrase in the taxonomy), so "machine learning" matches
/// even though tokenizers emit it as two tokens. No fuzzy matching: a phrase
/// either appears verbatim or goes undetected.
pub struct SkillExtractor<'a> {
    taxonomy: &'a SkillTaxonomy,
}

impl<'a> SkillExtractor<'a> {
    pub fn new(taxonomy: &'a SkillTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// Returns the detected skills as a sorted, deduplicated list.
    /// Always a subset of the taxonomy; never errors.
    pub fn extract(&self, tokens: &[String]) -> Vec<String> {
        let max_window = self.taxonomy.max_phrase_tokens();
        if max_window == 0 {
            return Vec::new();
        }

        let mut found: HashSet<String> = HashSet::new();

        for start in 0..tokens.len() {
            let mut phrase = String::new();
            for token in tokens.iter().skip(start).take(max_window) {
                if !phrase.is_empty() {
                    phrase.push(' ');
                }
                phrase.push_str(token);
                if self.taxonomy.contains(&phrase) {
                    found.insert(phrase.clone());
                }
            }
        }

        let mut skills: Vec<String> = found.into_iter().collect();
        skills.sort();
        skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::Tokenizer;

    fn extract(text: &str) -> Vec<String> {
        let taxonomy = SkillTaxonomy::data_roles();
        let tokens = Tokenizer::new().tokenize(text);
        SkillExtractor::new(&taxonomy).extract(&tokens)
    }

    #[test]
    fn test_single_token_skills() {
        let skills = extract("Experienced with Python, SQL and Tableau.");
        assert_eq!(skills, vec!["python", "sql", "tableau"]);
    }

    #[test]
    fn test_multi_token_skills() {
        let skills = extract("Applied machine learning and natural language processing at scale.");
        assert!(skills.contains(&"machine learning".to_string()));
        assert!(skills.contains(&"natural language processing".to_string()));
        // "nlp" is in the taxonomy but only as the literal token
        assert!(!skills.contains(&"nlp".to_string()));
    }

    #[test]
    fn test_deduplication() {
        let skills = extract("Python, python, PYTHON");
        assert_eq!(skills, vec!["python"]);
    }

    #[test]
    fn test_output_is_taxonomy_subset() {
        let taxonomy = SkillTaxonomy::data_roles();
        let tokens = Tokenizer::new().tokenize(
            "Led Spark and Hadoop pipelines, mentored juniors, shipped dashboards in Power BI.",
        );
        let skills = SkillExtractor::new(&taxonomy).extract(&tokens);

        assert!(!skills.is_empty());
        for skill in &skills {
            assert!(taxonomy.contains(skill));
        }
    }

    #[test]
    fn test_no_matches_yields_empty_set() {
        let skills = extract("Enjoys gardening and long walks.");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_punctuated_skills() {
        let skills = extract("Maintained CI/CD for C++ services on AWS.");
        assert_eq!(skills, vec!["aws", "c++", "ci/cd"]);
    }
}
