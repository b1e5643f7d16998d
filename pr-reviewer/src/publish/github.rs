//! GitHub REST client for publishing review output.
//!
//! Endpoints used:
//! - POST /repos/{owner}/{repo}/issues/{number}/comments   (summary note)
//! - GET  /repos/{owner}/{repo}/pulls/{number}.diff        (unified diff text)
//! - POST /repos/{owner}/{repo}/pulls/{number}/reviews     (anchored comment)
//!
//! The token travels per-request (not process config), so a client is built
//! per publish run.

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use tracing::debug;

use crate::errors::PrResult;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_api: String,
    token: String,
}

impl GitHubClient {
    /// Constructs a client for one publish run with the per-request token.
    pub fn new(token: String) -> PrResult<Self> {
        let http = Client::builder().user_agent("pr-reviewer/0.1").build()?;
        Ok(Self {
            http,
            base_api: GITHUB_API_BASE.to_string(),
            token,
        })
    }

    /// Posts the top-level summary as an issue comment on the PR.
    pub async fn create_issue_comment(
        &self,
        repository: &str,
        pr_number: u64,
        body: &str,
    ) -> PrResult<()> {
        #[derive(Serialize)]
        struct CommentBody<'a> {
            body: &'a str,
        }

        let url = format!(
            "{}/repos/{}/issues/{}/comments",
            self.base_api, repository, pr_number
        );
        debug!(%url, "github: create issue comment");

        self.http
            .post(&url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .json(&CommentBody { body })
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// Fetches the pull request's full unified diff as text.
    pub async fn fetch_pull_diff(&self, repository: &str, pr_number: u64) -> PrResult<String> {
        let url = format!(
            "{}/repos/{}/pulls/{}.diff",
            self.base_api, repository, pr_number
        );
        debug!(%url, "github: fetch pull diff");

        let diff = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(diff)
    }

    /// Posts one file/line-anchored review comment.
    pub async fn create_review_comment(
        &self,
        repository: &str,
        pr_number: u64,
        path: &str,
        line: u32,
        comment: &str,
    ) -> PrResult<()> {
        #[derive(Serialize)]
        struct ReviewAnchor<'a> {
            path: &'a str,
            line: u32,
            body: &'a str,
        }
        #[derive(Serialize)]
        struct ReviewBody<'a> {
            body: String,
            event: &'a str,
            comments: Vec<ReviewAnchor<'a>>,
        }

        let url = format!(
            "{}/repos/{}/pulls/{}/reviews",
            self.base_api, repository, pr_number
        );
        debug!(%url, line, "github: create review comment");

        self.http
            .post(&url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .json(&ReviewBody {
                body: format!("🤖 **AI Code Review**\n\n{comment}"),
                event: "COMMENT",
                comments: vec![ReviewAnchor {
                    path,
                    line,
                    body: comment,
                }],
            })
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
