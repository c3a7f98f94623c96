//! Persistence and correlation: the CSV tables and the issue-to-commit
//! join that produces the final dataset.

pub mod correlate;
pub mod store;

pub use correlate::{correlate, key_matches};
