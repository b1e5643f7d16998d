use pr_reviewer::types::ReviewRequest;
use serde::Deserialize;

/// Request body for analyzing a GitHub pull request.
///
/// This payload is sent by a CI job or GitHub Actions workflow.
#[derive(Debug, Deserialize)]
pub struct AnalyzePrRequest {
    /// Pull request number.
    pub pr_number: u64,
    /// Pull request title.
    pub pr_title: String,
    /// Pull request description body.
    pub pr_body: String,
    /// Login of the PR author.
    pub pr_author: String,
    /// Repository-relative paths of changed files.
    pub changed_files: Vec<String>,
    /// Full unified diff of the pull request.
    pub diff_content: String,
    /// Repository slug in "owner/repo" form.
    pub repository: String,
    /// GitHub token for publishing; empty skips publishing.
    pub github_token: String,
}

impl AnalyzePrRequest {
    /// Converts the wire payload into the pipeline's request value.
    pub fn into_review_request(self) -> ReviewRequest {
        ReviewRequest {
            pr_number: self.pr_number,
            pr_title: self.pr_title,
            pr_body: self.pr_body,
            pr_author: self.pr_author,
            changed_files: self.changed_files,
            diff_content: self.diff_content,
            repository: self.repository,
            github_token: self.github_token,
        }
    }
}
