//! # Repository Endpoints
//!
//! GitHub API endpoint implementation for creating repositories within an
//! organization.

use reqwest::Method;
use tracing::instrument;

use crate::client::GitHubClient;
use crate::error::{Error, Result};
use crate::models::Repository;
use crate::schema;

/// Parameters for creating a repository in an organization
#[derive(Debug, Clone, Default)]
pub struct CreateRepositoryParams {
  /// Repository name
  pub name: String,
  /// Organization the repository is created in
  pub org: String,
  /// Repository description
  pub description: Option<String>,
  /// Link to a related resource; must be a valid URI when present
  pub homepage: Option<String>,
}

impl GitHubClient {
  /// Create a repository in an organization
  ///
  /// Issues `POST orgs/{org}/repos` and returns the repository the server
  /// reports back. Input failing the create-repository schema fails with
  /// [`Error::Validation`] before any request is made.
  #[instrument(skip(self), level = "debug")]
  pub async fn create_repository(&self, params: &CreateRepositoryParams) -> Result<Repository> {
    let (org, body) = schema::validate_create(params).map_err(Error::Validation)?;

    let url = self.endpoint(&["orgs", &org, "repos"]);
    self.send(Method::POST, url, Some(&body)).await
  }
}
