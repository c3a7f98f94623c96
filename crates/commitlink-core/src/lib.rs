//! Core types, configuration, and error handling for commitlink.
//!
//! This crate provides the shared foundation used by the other commitlink
//! crates:
//! - [`CommitlinkError`] — unified error type using `thiserror`
//! - [`CommitlinkConfig`] — configuration loaded from `.commitlink.toml`
//! - Shared records: [`IssueRecord`], [`CommitRecord`], [`CorrelatedRecord`]

mod config;
mod error;
mod types;

pub use config::{CommitlinkConfig, OutputConfig, RepoConfig, TrackerConfig};
pub use error::CommitlinkError;
pub use types::{CommitRecord, CorrelatedRecord, IssueRecord};

/// A convenience `Result` type for commitlink operations.
pub type Result<T> = std::result::Result<T, CommitlinkError>;
