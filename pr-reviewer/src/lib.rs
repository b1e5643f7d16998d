//! Public entry for the pr-reviewer pipeline.
//!
//! Single high-level function to run the whole pipeline for a Pull Request:
//!
//! 1) **Generate** — detect languages, chunk the diff under the byte budget,
//!    one sequential provider call per chunk (line comments), one summary
//!    call (suggestions/issues/score). Provider failures degrade: a chunk is
//!    skipped, the summary falls back to deterministic static text.
//!
//! 2) **Publish** (optional, caller-gated on the per-request token) — one
//!    top-level issue comment plus one anchored review comment per parsed
//!    line comment, via the GitHub REST API.
//!
//! The pipeline uses `tracing` for debug logging and avoids `async-trait`
//! and heap trait objects (no `Box<dyn ...>`). Provider and LLM dispatch are
//! enum-based; errors are unified by the crate-level error type.

pub mod chunk;
pub mod errors;
pub mod lang;
pub mod parser;
pub mod publish;
pub mod review;
pub mod types;

use tracing::debug;

use review::llm::{LlmConfig, ReviewBackend};
use types::{ReviewOutcome, ReviewRequest};

/// Run review generation for a single PR and return the structured outcome.
///
/// This is the entry an HTTP handler calls. The backend is selected once from
/// `llm_cfg` (no ambient globals, no per-call string dispatch); generation
/// itself never fails — every provider failure degrades per the pipeline
/// rules, so the only fallible step is the separate [`publish::publish_review`].
pub async fn run_review(req: &ReviewRequest, llm_cfg: &LlmConfig) -> ReviewOutcome {
    debug!(pr = req.pr_number, repo = %req.repository, "init review backend");
    let backend = ReviewBackend::from_config(llm_cfg);

    review::generate_review(req, &backend).await
}

// -----------------------------------------------------------------------------
// Convenience re-exports for downstream users
// -----------------------------------------------------------------------------

pub use errors::{Error as ReviewerError, PrResult};
pub use publish::publish_review;
pub use review::llm::{LlmConfig as ReviewerLlmConfig, LlmKind as ReviewerLlmKind};
pub use types::{LineComment as ReviewerLineComment, ReviewOutcome as ReviewerOutcome};
