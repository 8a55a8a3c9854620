//! # GitHub SDK
//!
//! Provides a small GitHub REST API client for creating organization
//! repositories, uploading file content, fetching user profiles, and
//! searching for users. Every operation validates its input against a
//! declarative schema before any request is issued, and maps each HTTP
//! round trip to either a decoded success value or a typed error.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;
mod schema;

// Re-export the client
pub use client::GitHubClient;
// Re-export error types
pub use error::{Constraint, Error, Result, ValidationError};
// Re-export endpoint parameter structs
pub use endpoints::contents::UploadContentParams;
pub use endpoints::repos::CreateRepositoryParams;
// Re-export models
pub use models::{Content, ContentCommit, ContentFile, Repository, UserProfile, UserSummary};
