//! Evaluation domain types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Completed evaluation of a startup idea
///
/// Structure returned by the evaluation API once a job reaches the
/// `completed` state. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Overall score on a 0-100 scale
    pub final_score: f64,
    /// Per-metric scores on a 0-10 scale, keyed by metric name
    /// (e.g. "market_size", "defensibility")
    pub metric_scores: BTreeMap<String, f64>,
    /// SWOT breakdown produced alongside the scores
    pub swot_analysis: SwotAnalysis,
}

/// SWOT analysis attached to an evaluation
///
/// Each list preserves the order the evaluator produced; any of them may
/// be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwotAnalysis {
    /// Internal advantages of the startup
    pub strengths: Vec<String>,
    /// Internal limitations or gaps
    pub weaknesses: Vec<String>,
    /// External factors the startup can leverage
    pub opportunities: Vec<String>,
    /// External risks or competitive pressures
    pub threats: Vec<String>,
}

impl SwotAnalysis {
    /// Returns true when no section contains any entry
    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
            && self.weaknesses.is_empty()
            && self.opportunities.is_empty()
            && self.threats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_deserializes_from_api_shape() {
        let json = r#"{
            "final_score": 78.0,
            "metric_scores": {
                "market_size": 8,
                "originality": 6.5
            },
            "swot_analysis": {
                "strengths": ["Clear niche"],
                "weaknesses": ["Thin margins"],
                "opportunities": ["Adjacent rentals"],
                "threats": ["Incumbent marketplaces"]
            }
        }"#;

        let result: EvaluationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.final_score, 78.0);
        assert_eq!(result.metric_scores.get("market_size"), Some(&8.0));
        assert_eq!(result.metric_scores.get("originality"), Some(&6.5));
        assert_eq!(result.swot_analysis.strengths, vec!["Clear niche"]);
        assert_eq!(result.swot_analysis.threats.len(), 1);
    }

    #[test]
    fn test_metric_scores_serialize_in_stable_order() {
        let mut metric_scores = BTreeMap::new();
        metric_scores.insert("scalability".to_string(), 7.0);
        metric_scores.insert("market_size".to_string(), 8.0);

        let result = EvaluationResult {
            final_score: 75.0,
            metric_scores,
            swot_analysis: SwotAnalysis::default(),
        };

        let json = serde_json::to_string(&result).unwrap();
        let market = json.find("market_size").unwrap();
        let scalability = json.find("scalability").unwrap();
        assert!(market < scalability);
    }

    #[test]
    fn test_empty_swot() {
        let swot = SwotAnalysis::default();
        assert!(swot.is_empty());

        let swot = SwotAnalysis {
            strengths: vec!["First mover".to_string()],
            ..SwotAnalysis::default()
        };
        assert!(!swot.is_empty());
    }
}
