//! Prompt builders for the review pipeline.
//!
//! Keep prompts compact; the diff travels in a fenced block for model
//! grounding, and the summary prompt deliberately omits the diff.

use std::collections::BTreeSet;

use crate::types::ReviewRequest;

/// Build the per-chunk prompt asking for line-by-line comments.
pub fn build_chunk_prompt(
    req: &ReviewRequest,
    languages: &BTreeSet<&'static str>,
    chunk_text: &str,
    chunk_index: usize,
    chunk_total: usize,
) -> String {
    let mut s = String::new();
    s.push_str(&format!("**PR Title:** {}\n", req.pr_title));
    s.push_str(&format!("**Author:** {}\n", req.pr_author));
    s.push_str(&format!("**Languages:** {}\n", join_languages(languages)));
    s.push_str(&format!(
        "\n**Code Diff Chunk {}/{}:**\n```diff\n{}\n```\n",
        chunk_index + 1,
        chunk_total,
        chunk_text
    ));
    s.push_str("\nProvide line-by-line comments using the specified format.");
    s
}

/// Build the overall-summary prompt (metadata + file list, no diff).
pub fn build_summary_prompt(req: &ReviewRequest, languages: &BTreeSet<&'static str>) -> String {
    let mut s = String::new();
    s.push_str(&format!("**PR Title:** {}\n", req.pr_title));
    s.push_str(&format!("**Author:** {}\n", req.pr_author));
    s.push_str(&format!("**Languages:** {}\n", join_languages(languages)));
    s.push_str(&format!("**Description:** {}\n", req.pr_body));
    s.push_str(&format!(
        "**Files Changed:** {}\n",
        req.changed_files.join(", ")
    ));
    s.push_str("\nProvide a concise overall assessment with a 1-10 score.");
    s
}

pub(crate) fn join_languages(languages: &BTreeSet<&'static str>) -> String {
    languages.iter().copied().collect::<Vec<_>>().join(", ")
}
