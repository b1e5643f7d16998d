pub mod analyze_pr_request;
pub mod analyze_pr_response;
pub mod analyze_pr_route;
