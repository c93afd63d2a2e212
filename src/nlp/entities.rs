//! Entity spans and the rule-based tagger standing in for an NER model

use unicode_segmentation::UnicodeSegmentation;

/// Label assigned to spans recognized as education credentials.
pub const EDUCATION_LABEL: &str = "EDUCATION";

const MISC_LABEL: &str = "MISC";

/// A recognized entity span with its label, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub text: String,
    pub label: String,
}

impl EntitySpan {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Rule-based entity tagger over resume text.
///
/// Stands in for the external NER stage: lines under an education heading
/// are emitted as `EDUCATION` spans, other degree-bearing sentences get a
/// generic label. Span order follows the document.
#[derive(Debug, Default, Clone)]
pub struct RuleEntityTagger;

const EDUCATION_HEADINGS: [&str; 4] = [
    "education",
    "academic background",
    "qualifications",
    "degrees",
];

// Markdown extraction strips heading markup without adding a colon, so
// these section names must be recognized bare as well.
const OTHER_SECTION_HEADINGS: [&str; 12] = [
    "skills",
    "experience",
    "work experience",
    "professional experience",
    "summary",
    "profile",
    "projects",
    "certifications",
    "contact",
    "interests",
    "languages",
    "references",
];

const DEGREE_KEYWORDS: [&str; 9] = [
    "bachelor", "master", "phd", "mba", "b.sc", "m.sc", "btech", "mtech", "degree",
];

impl RuleEntityTagger {
    pub fn new() -> Self {
        Self
    }

    pub fn tag(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();
        let mut in_education_section = false;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Some(is_education) = heading_kind(trimmed) {
                in_education_section = is_education;
                continue;
            }

            if in_education_section {
                spans.push(EntitySpan::new(trimmed, EDUCATION_LABEL));
            } else {
                for sentence in trimmed.unicode_sentences() {
                    let sentence = sentence.trim();
                    if !sentence.is_empty() && mentions_degree(sentence) {
                        spans.push(EntitySpan::new(sentence, MISC_LABEL));
                    }
                }
            }
        }

        spans
    }
}

/// Returns `Some(true)` for education headings, `Some(false)` for other
/// section headings, `None` for body lines.
fn heading_kind(line: &str) -> Option<bool> {
    let lower = line.to_lowercase();
    let lower = lower.trim_end_matches(':').trim();

    if EDUCATION_HEADINGS.iter().any(|h| *h == lower) {
        return Some(true);
    }

    if OTHER_SECTION_HEADINGS.iter().any(|h| *h == lower) {
        return Some(false);
    }

    let looks_like_heading = line.ends_with(':') && line.split_whitespace().count() <= 4;
    if looks_like_heading {
        return Some(false);
    }

    None
}

fn mentions_degree(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    DEGREE_KEYWORDS.iter().any(|k| lower.contains(k))
}
