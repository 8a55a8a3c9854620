//! # Input Validation Schemas
//!
//! One schema per operation input shape, built from a small set of
//! combinators: required/optional trimmed strings, a token alphabet check, a
//! URI shape check, a relative-reference check, and a base64 check.
//!
//! Validation is synchronous and side-effect-free, and it knows nothing about
//! HTTP. Each entry point checks a candidate value against its schema and
//! returns a trimmed, defaulted copy for the request pipeline; the caller's
//! input is never mutated. Every operation runs its schema to completion
//! before any network request is issued.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use url::Url;

use crate::consts::DEFAULT_BRANCH;
use crate::endpoints::contents::UploadContentParams;
use crate::endpoints::repos::CreateRepositoryParams;
use crate::error::{Constraint, ValidationError};
use crate::models::{CreateRepositoryBody, UploadContentBody};

/// Require a non-empty string after trimming surrounding whitespace
fn required_string(field: &'static str, value: &str) -> Result<String, ValidationError> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(ValidationError::new(field, Constraint::Empty));
  }
  Ok(trimmed.to_string())
}

/// Accept an absent value; a present one must satisfy [`required_string`]
fn optional_string(field: &'static str, value: Option<&str>) -> Result<Option<String>, ValidationError> {
  match value {
    None => Ok(None),
    Some(value) => required_string(field, value).map(Some),
  }
}

/// Require the value to parse as an absolute URI
fn absolute_uri(field: &'static str, value: &str) -> Result<(), ValidationError> {
  if Url::parse(value).is_err() {
    return Err(ValidationError::new(field, Constraint::Uri));
  }
  Ok(())
}

/// Require the value to be a relative reference: no scheme, no host, no
/// leading slash, and resolvable against a base
fn relative_reference(field: &'static str, value: &str) -> Result<(), ValidationError> {
  // A value that parses on its own carries a scheme and is absolute
  if Url::parse(value).is_ok() || value.starts_with('/') {
    return Err(ValidationError::new(field, Constraint::RelativeReference));
  }

  let base = Url::parse("https://relative-reference.invalid/").expect("the probe base URL is well-formed");
  if base.join(value).is_err() {
    return Err(ValidationError::new(field, Constraint::RelativeReference));
  }

  Ok(())
}

/// Require the value to decode as standard base64
fn base64(field: &'static str, value: &str) -> Result<(), ValidationError> {
  if BASE64_STANDARD.decode(value).is_err() {
    return Err(ValidationError::new(field, Constraint::Base64));
  }
  Ok(())
}

/// Construction schema: the auth token is a trimmed, non-empty string drawn
/// from the token alphabet (alphanumerics and underscore).
pub fn validate_token(value: &str) -> Result<String, ValidationError> {
  let token = required_string("token", value)?;
  if !token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
    return Err(ValidationError::new("token", Constraint::Token));
  }
  Ok(token)
}

/// Create-repository schema. Returns the target organization and the
/// normalized request body; absent optionals stay absent (serialized as
/// `null`).
pub fn validate_create(params: &CreateRepositoryParams) -> Result<(String, CreateRepositoryBody), ValidationError> {
  let name = required_string("name", &params.name)?;
  let org = required_string("org", &params.org)?;
  let description = optional_string("description", params.description.as_deref())?;
  let homepage = optional_string("homepage", params.homepage.as_deref())?;
  if let Some(homepage) = homepage.as_deref() {
    absolute_uri("homepage", homepage)?;
  }

  Ok((org, CreateRepositoryBody { name, description, homepage }))
}

/// Validated upload input: the URL position fields plus the request body
pub struct ValidatedUpload {
  pub owner: String,
  pub repo: String,
  pub body: UploadContentBody,
}

/// Upload schema. The path must be a relative reference, the content valid
/// base64, and the branch defaults to `master` when omitted.
pub fn validate_upload(params: &UploadContentParams) -> Result<ValidatedUpload, ValidationError> {
  let owner = required_string("owner", &params.owner)?;
  let repo = required_string("repo", &params.repo)?;
  let path = required_string("path", &params.path)?;
  relative_reference("path", &path)?;
  let message = required_string("message", &params.message)?;
  let content = required_string("content", &params.content)?;
  base64("content", &content)?;
  let branch = match params.branch.as_deref() {
    Some(branch) => required_string("branch", branch)?,
    None => DEFAULT_BRANCH.to_string(),
  };

  Ok(ValidatedUpload {
    owner,
    repo,
    body: UploadContentBody {
      path,
      message,
      content,
      branch,
    },
  })
}

/// Single-keyword / login schema: a required non-empty trimmed string
pub fn validate_keyword(field: &'static str, value: &str) -> Result<String, ValidationError> {
  required_string(field, value)
}

/// Keyword-list schema: at least one keyword, each a valid single keyword
pub fn validate_keywords(values: &[String]) -> Result<Vec<String>, ValidationError> {
  if values.is_empty() {
    return Err(ValidationError::new("keywords", Constraint::EmptyList));
  }
  values.iter().map(|value| validate_keyword("keywords", value)).collect()
}
