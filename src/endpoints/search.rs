//! # User Search Endpoints
//!
//! GitHub API endpoint implementations for searching users by keyword,
//! including the concurrent multi-keyword fan-out.

use futures::future::try_join_all;
use reqwest::Method;
use tracing::instrument;

use crate::client::{GitHubClient, NO_BODY};
use crate::error::{Error, Result};
use crate::models::{SearchResults, UserSummary};
use crate::schema;

impl GitHubClient {
  /// Search for users matching a single keyword
  ///
  /// Issues `GET search/users?q={keyword}` with the keyword percent-encoded
  /// and returns the matching entries; an empty result list is a valid
  /// outcome.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_for_user(&self, keyword: &str) -> Result<Vec<UserSummary>> {
    let keyword = schema::validate_keyword("keyword", keyword).map_err(Error::Validation)?;

    let mut url = self.endpoint(&["search", "users"]);
    url.query_pairs_mut().append_pair("q", &keyword);

    let results: SearchResults = self.send(Method::GET, url, NO_BODY).await?;
    Ok(results.items)
  }

  /// Search for users across several keywords concurrently
  ///
  /// One search is issued per keyword. The result order matches the keyword
  /// order regardless of which request completes first, and the first
  /// failing search fails the whole call, discarding its siblings' results.
  /// An empty keyword list fails with [`Error::Validation`] before any
  /// request is made.
  pub async fn search_for_users<I, S>(&self, keywords: I) -> Result<Vec<Vec<UserSummary>>>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
    let keywords = schema::validate_keywords(&keywords).map_err(Error::Validation)?;

    // try_join_all re-associates results positionally, not by completion
    // order, and resolves to the first error as soon as one occurs
    try_join_all(keywords.iter().map(|keyword| self.search_for_user(keyword))).await
  }
}
