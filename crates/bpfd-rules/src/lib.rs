//! bpfd-rules: rule storage, validation, and the match decision ladder.

pub mod error;
pub mod matcher;
pub mod rule_file;
pub mod store;
pub mod validator;

pub use error::ConfigError;
pub use matcher::matches;
pub use rule_file::parse_rule_file;
pub use store::RuleStore;
pub use validator::{validate, validate_referential, validate_structural};
