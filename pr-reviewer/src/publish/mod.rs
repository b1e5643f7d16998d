//! Publisher.
//!
//! Posts a finished [`ReviewOutcome`] back to the GitHub PR: one top-level
//! issue comment with the summary, then one anchored review comment per
//! parsed line comment.
//!
//! Line comments carry a PR-diff-relative line offset straight from the
//! model's output, so the target file is resolved by re-fetching the diff and
//! scanning for the enclosing `diff --git` header. That offset comparison is a
//! known-approximate heuristic inherited from the existing behavior; it does
//! not apply hunk arithmetic, and it is kept as-is deliberately. A comment
//! whose file cannot be resolved is dropped with a log, not retried.
//!
//! Any GitHub API failure propagates to the caller.

pub mod github;

use std::time::Instant;

use tracing::{info, warn};

use crate::errors::PrResult;
use crate::types::{ReviewOutcome, ReviewRequest};
use github::GitHubClient;

/// Publish `outcome` to the pull request named by `req`.
///
/// Posts the summary first, then each line comment. Returns how many line
/// comments were actually anchored (dropped ones are logged).
pub async fn publish_review(req: &ReviewRequest, outcome: &ReviewOutcome) -> PrResult<usize> {
    let t0 = Instant::now();
    let client = GitHubClient::new(req.github_token.clone())?;

    client
        .create_issue_comment(&req.repository, req.pr_number, &outcome.summary)
        .await?;

    let mut anchored = 0usize;
    for lc in &outcome.line_comments {
        let diff = client
            .fetch_pull_diff(&req.repository, req.pr_number)
            .await?;

        match find_file_path_for_line(&diff, lc.line_number) {
            Some(path) => {
                client
                    .create_review_comment(
                        &req.repository,
                        req.pr_number,
                        path,
                        lc.line_number,
                        &lc.comment,
                    )
                    .await?;
                anchored += 1;
            }
            None => {
                warn!(
                    line = lc.line_number,
                    "publish: no file path resolved, dropping comment"
                );
            }
        }
    }

    info!(
        pr = req.pr_number,
        repo = %req.repository,
        anchored,
        dropped = outcome.line_comments.len() - anchored,
        took_ms = t0.elapsed().as_millis() as u64,
        "publish: done"
    );

    Ok(anchored)
}

/// Locates the file a diff-relative line offset falls under.
///
/// Walks the diff counting lines; on each `diff --git a/x b/y` header the
/// current file becomes the fourth token with its `b/` prefix stripped. The
/// first position at or past `line_number` resolves to the current file.
pub fn find_file_path_for_line(diff_content: &str, line_number: u32) -> Option<&str> {
    let mut current_file: Option<&str> = None;

    for (i, line) in diff_content.lines().enumerate() {
        if line.starts_with("diff --git") {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 4 {
                current_file = parts[3].get(2..);
            }
        }

        if let Some(file) = current_file {
            if i as u32 >= line_number {
                return Some(file);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIFF: &str = "diff --git a/first.py b/first.py\n\
@@ -1,2 +1,2 @@\n\
-old = 1\n\
+new = 1\n\
diff --git a/second.sql b/second.sql\n\
@@ -1 +1 @@\n\
+SELECT 2;";

    #[test]
    fn resolves_file_for_offsets_inside_its_section() {
        assert_eq!(find_file_path_for_line(DIFF, 0), Some("first.py"));
        assert_eq!(find_file_path_for_line(DIFF, 3), Some("first.py"));
    }

    #[test]
    fn later_offsets_resolve_to_the_later_file() {
        assert_eq!(find_file_path_for_line(DIFF, 5), Some("second.sql"));
        assert_eq!(find_file_path_for_line(DIFF, 6), Some("second.sql"));
    }

    #[test]
    fn offset_past_the_diff_resolves_to_nothing() {
        assert_eq!(find_file_path_for_line(DIFF, 40), None);
    }

    #[test]
    fn text_without_headers_resolves_to_nothing() {
        assert_eq!(find_file_path_for_line("+just a line\n-another", 0), None);
    }
}
