pub mod analyze_pr;
pub mod health;
