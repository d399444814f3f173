//! Relevance-ranked employee search.
//!
//! A query flows through four stages: tokenization into lowercase terms,
//! per-employee scoring against tiered match rules, ranking of the positive
//! scores, and truncation to the requested limit.

// Module declarations
pub mod fuzzy;
pub mod rank;
pub mod scoring;
pub mod service;
pub mod tokenize;

// Public re-exports (used via lib.rs)
pub use rank::{ScoredEmployee, rank};
pub use scoring::{Candidate, MatchRule, ScoreBreakdown, Scorer, ScoringWeights, TermMatch};
pub use service::EmployeeSearch;
pub use tokenize::{MIN_TERM_LENGTH, tokenize};
