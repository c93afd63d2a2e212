//! Heuristic ATS scorecard for resumes outside the data-role domain

use serde::Serialize;

/// Descriptive counts over raw resume text plus static improvement tips.
/// No scoring formula and no pass/fail verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ATSScorecard {
    pub word_count: usize,
    pub character_count: usize,
    pub bullet_points: usize,
    pub tips: Vec<String>,
}

const IMPROVEMENT_TIPS: [&str; 4] = [
    "Add technical/data skills (e.g., SQL, Python, Excel)",
    "Use bullet points with measurable achievements",
    "Keep it between 450-750 words",
    "Fix any grammar/spelling issues",
];

#[derive(Debug, Default, Clone)]
pub struct ATSHeuristicScorer;

impl ATSHeuristicScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, text: &str) -> ATSScorecard {
        // Bullet glyphs plus hyphen-space markers, summed
        let bullet_points = text.matches('\u{2022}').count() + text.matches("- ").count();

        ATSScorecard {
            word_count: text.split_whitespace().count(),
            character_count: text.chars().count(),
            bullet_points,
            tips: IMPROVEMENT_TIPS.iter().map(|t| t.to_string()).collect(),
        }
    }
}
