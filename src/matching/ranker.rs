//! Ranking of precomputed candidate match records

use crate::dataset::records::CandidateMatch;

/// Orders precomputed match records and selects the top N. Scores are
/// passed through unchanged; nothing is recomputed here.
#[derive(Debug, Default, Clone)]
pub struct CandidateRanker;

impl CandidateRanker {
    pub fn new() -> Self {
        Self
    }

    /// Top `top_n` records by `final_match_score` descending; equal scores
    /// keep their original order.
    pub fn top_candidates(&self, records: &[CandidateMatch], top_n: usize) -> Vec<CandidateMatch> {
        let mut ranked = records.to_vec();
        ranked.sort_by(|a, b| b.final_match_score.total_cmp(&a.final_match_score));
        ranked.truncate(top_n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::records::CandidateRecord;

    fn record(id: &str, final_score: f64) -> CandidateMatch {
        CandidateMatch {
            candidate: CandidateRecord {
                candidate_id: id.to_string(),
                name: format!("Candidate {}", id),
                desired_role: "Data Analyst".to_string(),
                location: "Remote".to_string(),
                availability: "Immediate".to_string(),
                education: "B.Sc".to_string(),
                certifications: "None".to_string(),
            },
            final_match_score: final_score,
            skill_match_percent: final_score,
            experience_fit_percent: final_score,
        }
    }

    #[test]
    fn test_top_five_of_twelve() {
        let ranker = CandidateRanker::new();
        let records: Vec<CandidateMatch> = (0..12)
            .map(|i| record(&format!("C{}", i), 50.0 + i as f64 * 3.0))
            .collect();

        let top = ranker.top_candidates(&records, 5);

        assert_eq!(top.len(), 5);
        assert_eq!(top[0].candidate.candidate_id, "C11");
        for pair in top.windows(2) {
            assert!(pair[0].final_match_score >= pair[1].final_match_score);
        }
    }

    #[test]
    fn test_ties_keep_original_order() {
        let ranker = CandidateRanker::new();
        let records = vec![record("A", 80.0), record("B", 80.0), record("C", 90.0)];

        let top = ranker.top_candidates(&records, 3);
        assert_eq!(top[0].candidate.candidate_id, "C");
        assert_eq!(top[1].candidate.candidate_id, "A");
        assert_eq!(top[2].candidate.candidate_id, "B");
    }

    #[test]
    fn test_requesting_more_than_available() {
        let ranker = CandidateRanker::new();
        let records = vec![record("A", 70.0)];

        assert_eq!(ranker.top_candidates(&records, 10).len(), 1);
    }

    #[test]
    fn test_empty_records() {
        let ranker = CandidateRanker::new();
        assert!(ranker.top_candidates(&[], 5).is_empty());
    }
}
