//! # Repository Content Endpoints
//!
//! GitHub API endpoint implementation for uploading base64-encoded file
//! content to a repository.

use reqwest::Method;
use tracing::instrument;

use crate::client::GitHubClient;
use crate::error::{Error, Result};
use crate::models::Content;
use crate::schema;

/// Parameters for uploading file content to a repository
#[derive(Debug, Clone, Default)]
pub struct UploadContentParams {
  /// Organization or user the repository belongs to
  pub owner: String,
  /// Repository name
  pub repo: String,
  /// Relative file path within the repository, including the file name
  pub path: String,
  /// Commit message
  pub message: String,
  /// Base64-encoded file content
  pub content: String,
  /// Target branch; defaults to `master` when omitted
  pub branch: Option<String>,
}

impl GitHubClient {
  /// Upload file content to a repository
  ///
  /// Issues `PUT repos/{owner}/{repo}/contents/{path}` with the path split
  /// into percent-encoded segments, and returns the created content
  /// metadata. Input failing the upload schema fails with
  /// [`Error::Validation`] before any request is made.
  #[instrument(skip(self, params), fields(owner = %params.owner, repo = %params.repo, path = %params.path), level = "debug")]
  pub async fn upload_content(&self, params: &UploadContentParams) -> Result<Content> {
    let validated = schema::validate_upload(params).map_err(Error::Validation)?;

    // Split the relative path so each component is encoded individually and
    // slashes keep separating URL segments
    let mut segments = vec!["repos", validated.owner.as_str(), validated.repo.as_str(), "contents"];
    segments.extend(validated.body.path.split('/'));

    let url = self.endpoint(&segments);
    self.send(Method::PUT, url, Some(&validated.body)).await
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{body_partial_json, header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn params() -> UploadContentParams {
    UploadContentParams {
      owner: "o".to_string(),
      repo: "r".to_string(),
      path: "README.md".to_string(),
      message: "m".to_string(),
      // base64("# Title")
      content: "IyBUaXRsZQ==".to_string(),
      branch: None,
    }
  }

  #[tokio::test]
  async fn test_upload_content_defaults_branch() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = GitHubClient::new("test_token")?.with_base_url(&mock_server.uri())?;

    Mock::given(method("PUT"))
      .and(path("/repos/o/r/contents/README.md"))
      .and(header("Authorization", "token test_token"))
      .and(body_partial_json(serde_json::json!({
          "path": "README.md",
          "message": "m",
          "content": "IyBUaXRsZQ==",
          "branch": "master"
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
          "content": {
              "name": "README.md",
              "path": "README.md",
              "sha": "95b966ae1c166bd92f8ae7d1c313e738c731dfc3",
              "size": 7
          },
          "commit": {
              "sha": "7638417db6d59f3c431d3e1f261cc637155684cd",
              "message": "m"
          }
      })))
      .mount(&mock_server)
      .await;

    let content = client.upload_content(&params()).await?;
    assert_eq!(content.content.unwrap().path, "README.md");
    assert_eq!(content.commit.message.as_deref(), Some("m"));

    Ok(())
  }

  #[tokio::test]
  async fn test_upload_content_nested_path() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = GitHubClient::new("test_token")?.with_base_url(&mock_server.uri())?;

    Mock::given(method("PUT"))
      .and(path("/repos/FrontenderMagazine/article/contents/images/image.jpg"))
      .and(body_partial_json(serde_json::json!({
          "path": "images/image.jpg",
          "branch": "develop"
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
          "content": {
              "name": "image.jpg",
              "path": "images/image.jpg",
              "sha": "f2cbcff2c0f21a7ccaeec9cb9dbc9b1b79f9e845"
          },
          "commit": {
              "sha": "1c8f096b3c0a6b3b034d4b5a9f0a938b37a0c0bd"
          }
      })))
      .mount(&mock_server)
      .await;

    let content = client
      .upload_content(&UploadContentParams {
        owner: "FrontenderMagazine".to_string(),
        repo: "article".to_string(),
        path: "images/image.jpg".to_string(),
        message: "Uploaded image.jpg".to_string(),
        content: "IyBUaXRsZQ==".to_string(),
        branch: Some("develop".to_string()),
      })
      .await?;

    assert_eq!(content.content.unwrap().name, "image.jpg");

    Ok(())
  }

  /// Invalid input never reaches the transport
  #[tokio::test]
  async fn test_upload_content_validation_failure_issues_no_request() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = GitHubClient::new("test_token")?.with_base_url(&mock_server.uri())?;

    Mock::given(method("PUT"))
      .respond_with(ResponseTemplate::new(201))
      .expect(0)
      .mount(&mock_server)
      .await;

    let error = client
      .upload_content(&UploadContentParams {
        content: "definitely not base64!".to_string(),
        ..params()
      })
      .await
      .unwrap_err();
    assert!(matches!(error, Error::Validation(_)));

    let error = client
      .upload_content(&UploadContentParams {
        path: "/etc/passwd".to_string(),
        ..params()
      })
      .await
      .unwrap_err();
    assert!(matches!(error, Error::Validation(_)));

    Ok(())
  }

  /// A non-success upload surfaces the decoded error payload
  #[tokio::test]
  async fn test_upload_content_conflict() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = GitHubClient::new("test_token")?.with_base_url(&mock_server.uri())?;

    let error_payload = serde_json::json!({
        "message": "Invalid request.\n\n\"sha\" wasn't supplied."
    });

    Mock::given(method("PUT"))
      .and(path("/repos/o/r/contents/README.md"))
      .respond_with(ResponseTemplate::new(422).set_body_json(error_payload.clone()))
      .mount(&mock_server)
      .await;

    let error = client.upload_content(&params()).await.unwrap_err();
    assert_eq!(error.status().map(|s| s.as_u16()), Some(422));
    assert_eq!(error.response_body(), Some(&error_payload));

    Ok(())
  }
}
