//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling
//! authentication, request building, response decoding, and outcome
//! classification for every endpoint in this crate.

use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::consts::{ACCEPT, API_BASE_URL, USER_AGENT};
use crate::error::{Error, Result};
use crate::schema;

/// Represents a GitHub API client
///
/// The client is constructed once from an auth token and is immutable for
/// its lifetime; it can be cloned cheaply and shared across concurrent
/// operations.
#[derive(Clone)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: Url,
  token: String,
}

impl GitHubClient {
  /// Create a new GitHub client from a personal access token
  ///
  /// The token is checked against the construction schema before any other
  /// client state is built; a missing or malformed token fails with
  /// [`Error::Configuration`] and no usable client is produced.
  pub fn new(token: &str) -> Result<Self> {
    let token = schema::validate_token(token).map_err(Error::Configuration)?;
    let base_url = Url::parse(API_BASE_URL).expect("the default base URL is well-formed");

    Ok(Self {
      client: Client::new(),
      base_url,
      token,
    })
  }

  /// Build an endpoint URL from the base URL and a list of path segments
  ///
  /// Each segment is appended individually, so user-supplied values are
  /// percent-encoded and can never break out of path position.
  pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
    let mut url = self.base_url.clone();
    url
      .path_segments_mut()
      .expect("the base URL is always a valid base")
      .pop_if_empty()
      .extend(segments);
    url
  }

  /// Dispatch a request and classify the outcome
  ///
  /// Success is returned iff the response status is in the 2xx range and the
  /// body decodes as JSON. A non-success status maps to
  /// [`Error::ServerResponse`] carrying the decoded error payload when the
  /// body was decodable; a body that fails to decode maps to the same error
  /// without a payload. Transport failures pass through unchanged as
  /// [`Error::Transport`].
  pub(crate) async fn send<B, R>(&self, method: Method, url: Url, body: Option<&B>) -> Result<R>
  where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
  {
    let mut request = self
      .client
      .request(method, url)
      .header("Authorization", format!("token {}", self.token))
      .header("Accept", ACCEPT)
      .header("User-Agent", USER_AGENT)
      .header("Content-Type", "application/json");

    if let Some(body) = body {
      request = request.json(body);
    }

    let response = request.send().await?;
    let status = response.status();
    let status_text = status.canonical_reason().unwrap_or("").to_string();
    let text = response.text().await?;

    debug!(%status, "received GitHub API response");

    if status.is_success() {
      match serde_json::from_str::<R>(&text) {
        Ok(decoded) => Ok(decoded),
        Err(_) => Err(Error::ServerResponse {
          status,
          status_text,
          body: None,
        }),
      }
    } else {
      let body = serde_json::from_str::<serde_json::Value>(&text).ok();
      Err(Error::ServerResponse {
        status,
        status_text,
        body,
      })
    }
  }
}

/// Type hint for requests without a body
pub(crate) const NO_BODY: Option<&()> = None;
