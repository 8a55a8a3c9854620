//! # Error Types
//!
//! Error taxonomy for the GitHub SDK. Callers can distinguish configuration
//! problems, rejected input, non-success server responses, and transport
//! failures by matching on the [`Error`] variants.

use std::fmt;

use reqwest::StatusCode;

/// Convenience alias used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The constraint an input field failed to satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
  /// The value is empty after trimming surrounding whitespace
  Empty,
  /// The value contains characters outside the token alphabet
  Token,
  /// The value is not a syntactically valid absolute URI
  Uri,
  /// The value is not a relative reference (it carries a scheme or host, or
  /// starts with a slash)
  RelativeReference,
  /// The value is not valid base64-encoded text
  Base64,
  /// The list contains no entries
  EmptyList,
}

impl fmt::Display for Constraint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let description = match self {
      Self::Empty => "must be a non-empty string",
      Self::Token => "must contain only alphanumeric and underscore characters",
      Self::Uri => "must be a valid URI",
      Self::RelativeReference => "must be a relative reference without a scheme or host",
      Self::Base64 => "must be valid base64-encoded text",
      Self::EmptyList => "must contain at least one entry",
    };
    f.write_str(description)
  }
}

/// Signals that an input value failed its schema
///
/// Validation errors are raised before any network request is issued and
/// carry the offending field along with the constraint it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("`{field}` {constraint}")]
pub struct ValidationError {
  /// Name of the field that failed validation
  pub field: &'static str,
  /// The constraint the field failed
  pub constraint: Constraint,
}

impl ValidationError {
  pub(crate) const fn new(field: &'static str, constraint: Constraint) -> Self {
    Self { field, constraint }
  }
}

/// All errors that may be returned by the GitHub client
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The auth token failed the construction schema; no usable client is
  /// produced
  #[error("invalid client configuration: {0}")]
  Configuration(#[source] ValidationError),
  /// Operation input failed its schema; no request was issued
  #[error("invalid input: {0}")]
  Validation(#[source] ValidationError),
  /// The round trip completed but the response was not a success, or its
  /// body could not be decoded as JSON
  #[error("GitHub responded with {status} {status_text}")]
  ServerResponse {
    /// HTTP status code of the response
    status: StatusCode,
    /// Canonical status text of the response
    status_text: String,
    /// Decoded error payload, absent when the body was not valid JSON
    body: Option<serde_json::Value>,
  },
  /// The round trip could not be completed at all; the underlying transport
  /// error is passed through unchanged
  #[error("failed to reach the GitHub API")]
  Transport(#[from] reqwest::Error),
}

impl Error {
  /// HTTP status code of a server response error, if that is what this is
  pub fn status(&self) -> Option<StatusCode> {
    match self {
      Self::ServerResponse { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// Decoded error payload of a server response error, when one was decodable
  pub fn response_body(&self) -> Option<&serde_json::Value> {
    match self {
      Self::ServerResponse { body, .. } => body.as_ref(),
      _ => None,
    }
  }
}
