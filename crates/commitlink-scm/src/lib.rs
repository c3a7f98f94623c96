//! Source repository access: synchronization and commit selection.
//!
//! Keeps a local working copy in sync with its remote via git2 and walks
//! its history to select the commits worth correlating against issue
//! records.

pub mod filter;
pub mod sync;
