//! Review orchestrator.
//!
//! Flow:
//!   1) Detect languages from the changed-file list;
//!   2) Chunk the diff under the byte budget;
//!   3) One provider call per chunk, strictly sequential; parse
//!      `LINE_COMMENT` lines tagged with the chunk index;
//!   4) One summary call (metadata + file list, no diff); run
//!      suggestion/issue/score extraction over its text;
//!   5) Assemble the final [`ReviewOutcome`].
//!
//! A failed chunk call is logged and skipped; a failed summary call (or a
//! missing provider) substitutes the deterministic fallback text. The
//! orchestrator itself therefore never fails.
//!
//! Logs:
//! - `INFO`: final summary (#chunks, #line_comments, score, timing)
//! - `DEBUG`: per-chunk decisions and timings.

pub mod fallback;
pub mod llm;
pub mod prompt;

use std::time::Instant;
use tracing::{debug, info, warn};

use crate::chunk::{DEFAULT_CHUNK_BYTES, chunk_diff};
use crate::lang::detect_languages;
use crate::parser::{extract_issues, extract_score, extract_suggestions, parse_line_comments};
use crate::types::{LineComment, ReviewOutcome, ReviewRequest};
use fallback::fallback_review;
use llm::ReviewBackend;
use prompt::{build_chunk_prompt, build_summary_prompt};

/// Run the full review generation for one request.
///
/// Only one provider call is in flight at a time; all state is request
/// scoped. See the module docs for the degrade rules.
pub async fn generate_review(req: &ReviewRequest, backend: &ReviewBackend) -> ReviewOutcome {
    let t0 = Instant::now();

    let languages = detect_languages(&req.changed_files);
    let chunks: Vec<_> = chunk_diff(&req.diff_content, DEFAULT_CHUNK_BYTES).collect();
    let chunk_total = chunks.len();
    debug!(
        chunks = chunk_total,
        languages = %prompt::join_languages(&languages),
        "review: chunked diff"
    );

    // Per-chunk line comments, sequential.
    let mut line_comments: Vec<LineComment> = Vec::new();
    for chunk in &chunks {
        let t_chunk = Instant::now();

        let chunk_text = match backend {
            ReviewBackend::Fallback => fallback_review(req),
            ReviewBackend::Provider(client) => {
                let chunk_prompt =
                    build_chunk_prompt(req, &languages, chunk.text, chunk.index, chunk_total);
                match client.generate(&chunk_prompt).await {
                    Ok(text) => text,
                    Err(err) => {
                        warn!(chunk = chunk.index, %err, "review: chunk call failed, skipping");
                        continue;
                    }
                }
            }
        };

        let parsed = parse_line_comments(&chunk_text, chunk.index);
        debug!(
            chunk = chunk.index,
            comments = parsed.len(),
            took_ms = t_chunk.elapsed().as_millis() as u64,
            "review: chunk processed"
        );
        line_comments.extend(parsed);
    }

    // Overall summary (no diff in the prompt).
    let summary = match backend {
        ReviewBackend::Fallback => fallback_review(req),
        ReviewBackend::Provider(client) => {
            let summary_prompt = build_summary_prompt(req, &languages);
            match client.generate(&summary_prompt).await {
                Ok(text) => text,
                Err(err) => {
                    warn!(%err, "review: summary call failed, substituting fallback text");
                    fallback_review(req)
                }
            }
        }
    };

    let outcome = ReviewOutcome {
        suggestions: extract_suggestions(&summary),
        issues: extract_issues(&summary),
        score: extract_score(&summary),
        line_comments,
        summary,
    };

    info!(
        pr = req.pr_number,
        repo = %req.repository,
        chunks = chunk_total,
        line_comments = outcome.line_comments.len(),
        score = outcome.score,
        took_ms = t0.elapsed().as_millis() as u64,
        "review: done"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DEFAULT_SCORE;

    fn request(diff: &str) -> ReviewRequest {
        ReviewRequest {
            pr_number: 7,
            pr_title: "Tighten input validation".into(),
            pr_body: "Rejects empty payloads".into(),
            pr_author: "octocat".into(),
            changed_files: vec!["src/server.py".into()],
            diff_content: diff.into(),
            repository: "owner/repo".into(),
            github_token: String::new(),
        }
    }

    #[tokio::test]
    async fn fallback_backend_yields_deterministic_outcome() {
        let req = request("diff --git a/src/server.py b/src/server.py\n+import os");
        let outcome = generate_review(&req, &ReviewBackend::Fallback).await;

        assert!(outcome.summary.contains("Tighten input validation"));
        assert!(outcome.line_comments.is_empty());
        assert_eq!(outcome.score, DEFAULT_SCORE);
        // The static text flags "Recommendations" and similar keyword lines.
        assert!(!outcome.suggestions.is_empty());
    }

    #[tokio::test]
    async fn empty_diff_still_produces_a_review() {
        let outcome = generate_review(&request(""), &ReviewBackend::Fallback).await;
        assert!(!outcome.summary.is_empty());
        assert_eq!(outcome.score, DEFAULT_SCORE);
    }
}
