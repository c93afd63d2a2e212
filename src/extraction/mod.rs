//! Resume extraction pipeline: skills, experience, education

pub mod education;
pub mod experience;
pub mod skills;
pub mod taxonomy;

use crate::error::Result;
use crate::nlp::{RuleEntityTagger, Tokenizer};
use serde::{Deserialize, Serialize};

pub use education::EducationExtractor;
pub use experience::{ExperienceEstimate, ExperienceExtractor};
pub use skills::SkillExtractor;
pub use taxonomy::SkillTaxonomy;

/// Structured attributes extracted from one resume's text.
///
/// Created per resume and never persisted. `skills` is a sorted,
/// deduplicated subset of the taxonomy; `education` preserves mention order
/// and duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub skills: Vec<String>,
    pub experience: ExperienceEstimate,
    pub education: Vec<String>,
}

/// Runs the extraction trio over raw resume text.
///
/// Holds the immutable taxonomy and the NLP adapters; each call is a pure
/// function of the input text.
pub struct ResumeExtractor {
    taxonomy: SkillTaxonomy,
    tokenizer: Tokenizer,
    tagger: RuleEntityTagger,
    experience: ExperienceExtractor,
    education: EducationExtractor,
}

impl ResumeExtractor {
    pub fn new(taxonomy: SkillTaxonomy) -> Result<Self> {
        Ok(Self {
            taxonomy,
            tokenizer: Tokenizer::new(),
            tagger: RuleEntityTagger::new(),
            experience: ExperienceExtractor::new(),
            education: EducationExtractor::new()?,
        })
    }

    pub fn extract(&self, text: &str) -> ExtractedProfile {
        let tokens = self.tokenizer.tokenize(text);
        let entities = self.tagger.tag(text);

        ExtractedProfile {
            skills: SkillExtractor::new(&self.taxonomy).extract(&tokens),
            experience: self.experience.extract(&tokens),
            education: self.education.extract(&entities),
        }
    }

    pub fn taxonomy(&self) -> &SkillTaxonomy {
        &self.taxonomy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\
Jane Smith
Data Analyst with 4 years in analytics and 6 months consulting.

Education:
M.Sc Data Science

Skills:
Python, SQL, Power BI, machine learning";

    #[test]
    fn test_full_extraction() {
        let extractor = ResumeExtractor::new(SkillTaxonomy::data_roles()).unwrap();
        let profile = extractor.extract(RESUME);

        assert!(profile.skills.contains(&"python".to_string()));
        assert!(profile.skills.contains(&"sql".to_string()));
        assert!(profile.skills.contains(&"power bi".to_string()));
        assert!(profile.skills.contains(&"machine learning".to_string()));
        assert_eq!(profile.experience.years, 4);
        assert_eq!(profile.experience.months, 6);
        assert_eq!(profile.education, vec!["M.Sc Data Science"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = ResumeExtractor::new(SkillTaxonomy::data_roles()).unwrap();
        let first = extractor.extract(RESUME);
        let second = extractor.extract(RESUME);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_text_yields_empty_profile() {
        let extractor = ResumeExtractor::new(SkillTaxonomy::data_roles()).unwrap();
        let profile = extractor.extract("");

        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
    }
}
