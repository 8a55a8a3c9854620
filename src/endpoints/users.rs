//! # User Endpoints
//!
//! GitHub API endpoint implementation for fetching a user's profile.

use reqwest::Method;
use tracing::instrument;

use crate::client::{GitHubClient, NO_BODY};
use crate::error::{Error, Result};
use crate::models::UserProfile;
use crate::schema;

impl GitHubClient {
  /// Get a user's profile by login
  ///
  /// Issues `GET users/{login}` with the login percent-encoded and returns
  /// the documented seven-field projection; anything else the API includes
  /// in the payload is dropped.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user(&self, login: &str) -> Result<UserProfile> {
    let login = schema::validate_keyword("login", login).map_err(Error::Validation)?;

    let url = self.endpoint(&["users", &login]);
    self.send(Method::GET, url, NO_BODY).await
  }
}
