use crate::domain::external_apis::github::{GitHubApi, Repository};
use crate::domain::models::issue::{CreatedIssue, Issue, IssueState, NewIssue};
use anyhow::{Context, Error};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const USER_AGENT: &str = "github-tool/1.0";
const ACCEPT_READ: &str = "application/vnd.github.v3+json";
const ACCEPT_WRITE: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";

/// Hard bound on every outbound call; a timeout is handled like any other
/// transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize, Debug, Clone)]
struct GitHubRepositoryResponse {
    // Optional so one partial element cannot fault the whole listing.
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
struct GitHubIssueResponse {
    #[serde(default)]
    number: Option<u64>,
    #[serde(default)]
    title: Option<String>,
    // The issues endpoint conflates issues and pull requests; this key is
    // present only on the pull request elements.
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

#[derive(Deserialize, Debug, Clone)]
struct GitHubCreatedIssueResponse {
    number: u64,
    title: String,
    html_url: String,
}

#[derive(Serialize, Debug)]
struct CreateIssueRequestBody<'a> {
    title: &'a str,
    body: &'a str,
    labels: &'a [String],
}

pub struct GitHubApiAdapter {
    client: Client,
    base_url: String,
}

impl GitHubApiAdapter {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Issues a single GET against the API and decodes the JSON body.
    /// Exactly one attempt per invocation; the caller collapses any error
    /// into its own failure text.
    async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Accept", ACCEPT_READ)
            .header("User-Agent", USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .with_context(|| format!("Failed to send request for {path}"))?;
        let response = response
            .error_for_status()
            .with_context(|| format!("API returned an error for {path}"))?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize response for {path}"))
    }
}

#[async_trait]
impl GitHubApi for GitHubApiAdapter {
    #[tracing::instrument(name = "GitHubApiAdapter::list_public_repositories", skip(self))]
    async fn list_public_repositories(&self, username: &str) -> Result<Vec<Repository>, Error> {
        let path = format!("/users/{username}/repos");
        let response_items: Vec<GitHubRepositoryResponse> = self.get_json(&path, &[]).await?;

        let repositories = response_items
            .into_iter()
            .filter_map(|repo_res| match repo_res.name {
                Some(name) => Some(Repository { name }),
                None => {
                    tracing::warn!("Skipping repository element without a name for {}", username);
                    None
                }
            })
            .collect();

        Ok(repositories)
    }

    #[tracing::instrument(name = "GitHubApiAdapter::list_issues", skip(self))]
    async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        state: IssueState,
    ) -> Result<Vec<Issue>, Error> {
        let path = format!("/repos/{owner}/{repo}/issues");
        let response_items: Vec<GitHubIssueResponse> =
            self.get_json(&path, &[("state", state.as_str())]).await?;

        let issues = response_items
            .into_iter()
            .filter(|issue_res| issue_res.pull_request.is_none())
            .filter_map(|issue_res| match (issue_res.number, issue_res.title) {
                (Some(number), Some(title)) => Some(Issue { number, title }),
                _ => {
                    tracing::warn!(
                        "Skipping issue element without number or title in {}/{}",
                        owner,
                        repo
                    );
                    None
                }
            })
            .collect();

        Ok(issues)
    }

    #[tracing::instrument(name = "GitHubApiAdapter::create_issue", skip(self, token, issue))]
    async fn create_issue(
        &self,
        token: &str,
        owner: &str,
        repo: &str,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, Error> {
        let url = format!("{}/repos/{owner}/{repo}/issues", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .header("Accept", ACCEPT_WRITE)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .json(&CreateIssueRequestBody {
                title: &issue.title,
                body: &issue.body,
                labels: &issue.labels,
            })
            .send()
            .await
            .with_context(|| format!("Failed to send issue creation request for {owner}/{repo}"))?;
        let response = response
            .error_for_status()
            .with_context(|| format!("API returned an error creating an issue in {owner}/{repo}"))?;
        let created: GitHubCreatedIssueResponse = response.json().await.with_context(|| {
            format!("Failed to deserialize issue creation response for {owner}/{repo}")
        })?;

        Ok(CreatedIssue {
            number: created.number,
            title: created.title,
            html_url: created.html_url,
        })
    }
}
