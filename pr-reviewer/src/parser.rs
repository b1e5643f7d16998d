//! Free-form review text parsing.
//!
//! Three independent line-by-line passes over provider output:
//! - `LINE_COMMENT: <n>: <text>` extraction (per chunk),
//! - keyword-triggered suggestion/issue extraction,
//! - score extraction via an ordered regex list.
//!
//! Malformed input is never an error here: non-numeric line numbers are
//! skipped, and a text without any score pattern falls back to a default.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::LineComment;

/// Marker token the providers are instructed to use for line comments.
const LINE_COMMENT_MARKER: &str = "LINE_COMMENT:";

/// Keywords that classify a line as a suggestion.
const SUGGESTION_KEYWORDS: &[&str] = &["suggestion", "recommend", "consider", "should"];

/// Keywords that classify a line as an issue.
const ISSUE_KEYWORDS: &[&str] = &["issue", "problem", "error", "bug", "concern"];

/// Upper bound for each extracted list.
const MAX_FINDINGS: usize = 10;

/// Score reported when no pattern matches or all matches are out of range.
/// Kept for compatibility with the pre-existing behavior; the value itself is
/// not derived from content.
pub const DEFAULT_SCORE: u8 = 8;

lazy_static! {
    /// Ordered score patterns; the first in-range capture wins.
    static ref SCORE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"score[:\s]+(\d+)").unwrap(),
        Regex::new(r"rating[:\s]+(\d+)").unwrap(),
        Regex::new(r"(\d+)/10").unwrap(),
        Regex::new(r"(\d+)\s*out\s*of\s*10").unwrap(),
        Regex::new(r"overall[:\s]+(\d+)").unwrap(),
    ];
}

/// Extracts `LINE_COMMENT: <n>: <text>` lines from provider output.
///
/// A line matches when (after trimming) it starts with the marker. Only the
/// first two colons are significant: the second field must parse as a line
/// number (otherwise the line is skipped), the remainder is the comment text.
pub fn parse_line_comments(response: &str, chunk_index: usize) -> Vec<LineComment> {
    let mut comments = Vec::new();

    for line in response.lines() {
        let line = line.trim();
        if !line.starts_with(LINE_COMMENT_MARKER) {
            continue;
        }
        let mut parts = line.splitn(3, ':');
        let (_, number, text) = match (parts.next(), parts.next(), parts.next()) {
            (Some(marker), Some(number), Some(text)) => (marker, number, text),
            _ => continue,
        };
        let Ok(line_number) = number.trim().parse::<u32>() else {
            continue;
        };
        comments.push(LineComment {
            line_number,
            comment: text.trim().to_string(),
            chunk_index,
        });
    }

    comments
}

/// Extracts up to 10 suggestion lines from free-form text.
pub fn extract_suggestions(text: &str) -> Vec<String> {
    extract_keyword_lines(text, SUGGESTION_KEYWORDS)
}

/// Extracts up to 10 issue lines from free-form text.
///
/// Independent of [`extract_suggestions`]; a line containing both keyword
/// families lands in both outputs.
pub fn extract_issues(text: &str) -> Vec<String> {
    extract_keyword_lines(text, ISSUE_KEYWORDS)
}

fn extract_keyword_lines(text: &str, keywords: &[&str]) -> Vec<String> {
    let mut out = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        let lower = line.to_lowercase();
        if !keywords.iter().any(|kw| lower.contains(kw)) {
            continue;
        }
        let stored = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
            .unwrap_or(line);
        out.push(stored.to_string());
        if out.len() == MAX_FINDINGS {
            break;
        }
    }

    out
}

/// Extracts an overall 1–10 score from free-form text.
///
/// Applies the ordered patterns against the lowercased text and returns the
/// first captured integer inside `1..=10`. Out-of-range captures fall through
/// to the next pattern; no match at all yields [`DEFAULT_SCORE`].
pub fn extract_score(text: &str) -> u8 {
    let lower = text.to_lowercase();

    for pattern in SCORE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&lower) {
            if let Ok(score) = caps[1].parse::<u8>() {
                if (1..=10).contains(&score) {
                    return score;
                }
            }
        }
    }

    DEFAULT_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_comment_basic() {
        let parsed = parse_line_comments("LINE_COMMENT: 42: fix this null check", 3);
        assert_eq!(
            parsed,
            vec![LineComment {
                line_number: 42,
                comment: "fix this null check".to_string(),
                chunk_index: 3,
            }]
        );
    }

    #[test]
    fn line_comment_non_numeric_index_is_skipped() {
        assert!(parse_line_comments("LINE_COMMENT: abc: bad", 0).is_empty());
    }

    #[test]
    fn line_comment_keeps_extra_colons_in_text() {
        let parsed = parse_line_comments("  LINE_COMMENT: 7: note: prefer `?` here", 0);
        assert_eq!(parsed[0].comment, "note: prefer `?` here");
        assert_eq!(parsed[0].line_number, 7);
    }

    #[test]
    fn line_comment_ignores_surrounding_prose() {
        let text = "Overall this looks fine.\nLINE_COMMENT: 3: rename this\nThanks!";
        assert_eq!(parse_line_comments(text, 1).len(), 1);
    }

    #[test]
    fn suggestions_strip_bullets() {
        let out = extract_suggestions("- consider renaming this variable");
        assert_eq!(out, vec!["consider renaming this variable"]);
        let out = extract_suggestions("* You should add a test");
        assert_eq!(out, vec!["You should add a test"]);
    }

    #[test]
    fn suggestions_capped_at_ten() {
        let text = (0..25)
            .map(|i| format!("- consider option {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(extract_suggestions(&text).len(), 10);
    }

    #[test]
    fn line_in_both_families_lands_in_both_lists() {
        let text = "- consider fixing this error path";
        assert_eq!(extract_suggestions(text).len(), 1);
        assert_eq!(extract_issues(text).len(), 1);
    }

    #[test]
    fn score_patterns_in_order() {
        assert_eq!(extract_score("Score: 7"), 7);
        assert_eq!(extract_score("I'd call it a 9/10."), 9);
        assert_eq!(extract_score("Overall: 6"), 6);
    }

    #[test]
    fn out_of_range_score_falls_back_to_default() {
        assert_eq!(extract_score("rating: 15"), DEFAULT_SCORE);
    }

    #[test]
    fn missing_score_falls_back_to_default() {
        assert_eq!(extract_score("looks good to me"), DEFAULT_SCORE);
    }
}
