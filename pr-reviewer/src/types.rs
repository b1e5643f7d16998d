//! Domain types shared across the review pipeline.

use serde::{Deserialize, Serialize};

/// Everything known about a pull request when a review is requested.
///
/// Constructed once per incoming call and never mutated; the access token
/// travels with the request rather than living in process-wide config.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    /// Pull request number within the repository.
    pub pr_number: u64,
    /// Pull request title.
    pub pr_title: String,
    /// Pull request description body.
    pub pr_body: String,
    /// Login of the PR author.
    pub pr_author: String,
    /// Repository-relative paths of all changed files.
    pub changed_files: Vec<String>,
    /// Full unified diff of the pull request.
    pub diff_content: String,
    /// Repository slug in "owner/repo" form.
    pub repository: String,
    /// Per-request GitHub token; empty means "do not publish".
    pub github_token: String,
}

/// One parsed line-anchored comment from LLM output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineComment {
    /// 1-based line offset the model referred to (PR-diff relative).
    pub line_number: u32,
    /// Comment text for that line.
    pub comment: String,
    /// Index of the diff chunk this comment was parsed from.
    pub chunk_index: usize,
}

/// Structured outcome of a full review run.
///
/// Built incrementally by the orchestrator across chunk iterations; immutable
/// once returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewOutcome {
    /// Overall narrative review text.
    pub summary: String,
    /// Up to 10 suggestion lines extracted from the summary.
    pub suggestions: Vec<String>,
    /// Up to 10 issue lines extracted from the summary.
    pub issues: Vec<String>,
    /// Overall score, always in 1..=10.
    pub score: u8,
    /// Line-anchored comments collected across all chunks.
    pub line_comments: Vec<LineComment>,
}
