pub mod config;
pub mod employee;
pub mod error;
pub mod search;
pub mod server;
pub mod store;
pub mod tracing;

pub use config::SearchConfig;
pub use employee::{Employee, EmployeeId};
pub use error::{ConfigError, StoreError};
pub use search::{EmployeeSearch, MatchRule, ScoreBreakdown, Scorer, ScoringWeights};
pub use store::{EmployeeStore, MemoryStore, RosterFile};
