use serde::{Deserialize, Serialize};

/// Request body for creating a repository in an organization
///
/// Absent optionals serialize as `null`, matching what the repository
/// creation endpoint expects for unset attributes.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepositoryBody {
  pub name: String,
  pub description: Option<String>,
  pub homepage: Option<String>,
}

/// Request body for uploading file content to a repository
#[derive(Debug, Clone, Serialize)]
pub struct UploadContentBody {
  pub path: String,
  pub message: String,
  pub content: String,
  pub branch: String,
}

/// Represents a GitHub repository
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
  pub id: u64,
  pub name: String,
  pub full_name: String,
  pub description: Option<String>,
  pub homepage: Option<String>,
  pub html_url: Option<String>,
  pub private: Option<bool>,
  pub default_branch: Option<String>,
  pub owner: Option<UserSummary>,
}

/// Represents content created or updated in a repository
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
  pub content: Option<ContentFile>,
  pub commit: ContentCommit,
}

/// File metadata returned by the contents endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ContentFile {
  pub name: String,
  pub path: String,
  pub sha: String,
  pub size: Option<u64>,
  pub html_url: Option<String>,
}

/// Commit metadata returned by the contents endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ContentCommit {
  pub sha: String,
  pub message: Option<String>,
  pub html_url: Option<String>,
}

/// The documented projection of a GitHub user profile
///
/// Only these seven fields are surfaced; anything else the API returns is
/// dropped during decoding. Fields the API does not return are `None`, never
/// substituted with synthetic values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
  pub login: String,
  pub blog: Option<String>,
  pub name: Option<String>,
  pub email: Option<String>,
  pub avatar_url: Option<String>,
  pub gravatar_id: Option<String>,
  pub company: Option<String>,
}

/// Represents a user entry from the search endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserSummary {
  pub login: String,
  pub id: u64,
  pub avatar_url: Option<String>,
  pub gravatar_id: Option<String>,
  pub html_url: Option<String>,
  pub score: Option<f64>,
}

/// Envelope returned by the user search endpoint
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchResults {
  #[allow(dead_code)]
  pub total_count: Option<u64>,
  #[serde(default)]
  pub items: Vec<UserSummary>,
}
