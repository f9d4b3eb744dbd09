//! Inbound response types and status classification

mod rules;
mod spec;

pub use rules::{KnownCondition, StatusRules};
pub use spec::{ApiResponse, StatusCode};
