//! Issue tracker access: Jira REST client, query construction, and the
//! paginated retrieval loop.
//!
//! Jira servers cap every search request at a fixed number of results, so
//! exhaustive retrieval re-derives the `created < startOfDay(-Nd)` window
//! from the oldest record of each full page and re-issues the query until
//! a page comes back short.

pub mod client;
pub mod fetch;
pub mod query;

pub use client::{FetchedIssue, JiraClient};
pub use fetch::{collapse_consecutive, fetch_all, PAGE_SIZE};
