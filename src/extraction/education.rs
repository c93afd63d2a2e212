//! Education extraction from entity spans

use crate::error::{Result, ResumeMatcherError};
use crate::nlp::{EntitySpan, EDUCATION_LABEL};
use aho_corasick::AhoCorasick;

const DEGREE_KEYWORDS: [&str; 9] = [
    "bachelor", "master", "phd", "mba", "b.sc", "m.sc", "btech", "mtech", "degree",
];

/// Keeps entity spans labeled `EDUCATION` or whose text mentions a degree
/// keyword. Document order and duplicate mentions are preserved, since
/// repeated mentions can carry distinct context.
pub struct EducationExtractor {
    keyword_matcher: AhoCorasick,
}

impl EducationExtractor {
    pub fn new() -> Result<Self> {
        let keyword_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(DEGREE_KEYWORDS)
            .map_err(|e| {
                ResumeMatcherError::Extraction(format!("Failed to build keyword matcher: {}", e))
            })?;

        Ok(Self { keyword_matcher })
    }

    pub fn extract(&self, entities: &[EntitySpan]) -> Vec<String> {
        entities
            .iter()
            .filter(|span| span.label == EDUCATION_LABEL || self.keyword_matcher.is_match(&span.text))
            .map(|span| span.text.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_match() {
        let extractor = EducationExtractor::new().unwrap();
        let entities = vec![
            EntitySpan::new("Stanford University", EDUCATION_LABEL),
            EntitySpan::new("Acme Corp", "ORG"),
        ];

        let education = extractor.extract(&entities);
        assert_eq!(education, vec!["Stanford University"]);
    }

    #[test]
    fn test_keyword_match_overrides_label() {
        let extractor = EducationExtractor::new().unwrap();
        let entities = vec![EntitySpan::new("Master of Science in Statistics", "MISC")];

        let education = extractor.extract(&entities);
        assert_eq!(education, vec!["Master of Science in Statistics"]);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let extractor = EducationExtractor::new().unwrap();
        let entities = vec![EntitySpan::new("BTECH in Mechanical Engineering", "MISC")];

        assert_eq!(extractor.extract(&entities).len(), 1);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let extractor = EducationExtractor::new().unwrap();
        let entities = vec![
            EntitySpan::new("MBA, 2019", "MISC"),
            EntitySpan::new("B.Sc Physics", EDUCATION_LABEL),
            EntitySpan::new("MBA, 2019", "MISC"),
        ];

        let education = extractor.extract(&entities);
        assert_eq!(education, vec!["MBA, 2019", "B.Sc Physics", "MBA, 2019"]);
    }

    #[test]
    fn test_unrelated_entities_dropped() {
        let extractor = EducationExtractor::new().unwrap();
        let entities = vec![
            EntitySpan::new("Acme Corp", "ORG"),
            EntitySpan::new("London", "LOC"),
        ];

        assert!(extractor.extract(&entities).is_empty());
    }
}
