pub mod anthropic_service;
pub mod open_ai_service;
