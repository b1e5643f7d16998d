use pr_reviewer::types::{LineComment, ReviewOutcome};
use serde::Serialize;

/// Response body returned after a PR review run.
#[derive(Debug, Serialize)]
pub struct AnalyzePrResponse {
    /// Overall narrative review text.
    pub review_comment: String,
    /// Up to 10 suggestion lines.
    pub suggestions: Vec<String>,
    /// Up to 10 issue lines.
    pub issues: Vec<String>,
    /// Overall score in 1..=10.
    pub overall_score: u8,
    /// Line-anchored comments parsed from chunk responses.
    pub line_comments: Vec<LineComment>,
}

impl From<ReviewOutcome> for AnalyzePrResponse {
    fn from(outcome: ReviewOutcome) -> Self {
        Self {
            review_comment: outcome.summary,
            suggestions: outcome.suggestions,
            issues: outcome.issues,
            overall_score: outcome.score,
            line_comments: outcome.line_comments,
        }
    }
}
