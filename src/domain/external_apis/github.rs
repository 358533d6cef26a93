use crate::domain::models::issue::{CreatedIssue, Issue, IssueState, NewIssue};
use anyhow::Error;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
}

/// Outbound port for the GitHub REST API.
///
/// Each method performs exactly one remote call; callers decide how a
/// failure is presented.
#[async_trait]
pub trait GitHubApi {
    async fn list_public_repositories(&self, username: &str) -> Result<Vec<Repository>, Error>;
    async fn list_issues(
        &self,
        owner: &str,
        repo: &str,
        state: IssueState,
    ) -> Result<Vec<Issue>, Error>;
    async fn create_issue(
        &self,
        token: &str,
        owner: &str,
        repo: &str,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, Error>;
}
