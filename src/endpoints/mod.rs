//! # GitHub API Endpoints
//!
//! Organized endpoint implementations for the resource types this SDK
//! covers: organization repositories, repository contents, users, and user
//! search.

pub mod contents;
pub mod repos;
pub mod search;
pub mod users;
