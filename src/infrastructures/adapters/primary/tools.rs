use crate::application::use_cases::create_issue::{
    CreateIssueInteractor, CreateIssueUseCase, CreateIssueUseCaseInput,
};
use crate::application::use_cases::list_issues::{
    ListIssuesInteractor, ListIssuesUseCase, ListIssuesUseCaseInput,
};
use crate::application::use_cases::list_public_repos::{
    ListPublicReposInteractor, ListPublicReposUseCase, ListPublicReposUseCaseInput,
};
use crate::application::use_cases::outcome::ToolOutcome;
use crate::domain::external_apis::github::GitHubApi;
use crate::domain::models::issue::IssueState;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use thiserror::Error;

pub const LIST_PUBLIC_REPOS: &str = "list_public_repos";
pub const LIST_ISSUES: &str = "list_issues";
pub const CREATE_ISSUE: &str = "create_issue";

/// A callable operation as advertised to the tool-calling host.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: LIST_PUBLIC_REPOS.to_string(),
            description: "List public repositories for a GitHub username.".to_string(),
            input_schema: json!({
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "username": {
                        "type": "string",
                        "description": "GitHub username (e.g. 'octocat')"
                    }
                },
                "required": ["username"]
            }),
        },
        ToolDescriptor {
            name: LIST_ISSUES.to_string(),
            description: "List issues in a GitHub repository, excluding pull requests."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "owner": {
                        "type": "string",
                        "description": "Repository owner (user or organization)"
                    },
                    "repo": {
                        "type": "string",
                        "description": "Repository name"
                    },
                    "state": {
                        "type": "string",
                        "enum": ["open", "closed", "all"],
                        "description": "Issue state filter; defaults to 'open'"
                    }
                },
                "required": ["owner", "repo"]
            }),
        },
        ToolDescriptor {
            name: CREATE_ISSUE.to_string(),
            description: "Create an issue in a GitHub repository.".to_string(),
            input_schema: json!({
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "owner": {
                        "type": "string",
                        "description": "Repository owner (user or organization)"
                    },
                    "repo": {
                        "type": "string",
                        "description": "Repository name"
                    },
                    "title": {
                        "type": "string",
                        "description": "Issue title"
                    },
                    "body": {
                        "type": "string",
                        "description": "Issue body in Markdown"
                    },
                    "labels": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Labels to apply; defaults to none"
                    }
                },
                "required": ["owner", "repo", "title", "body"]
            }),
        },
    ]
}

/// Host-protocol failures. Distinct from `ToolOutcome::Failure`, which is an
/// ordinary operation result.
#[derive(Debug, Error)]
pub enum ToolDispatchError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),
    #[error("invalid parameters for tool '{tool}': {source}")]
    InvalidParams {
        tool: String,
        source: serde_json::Error,
    },
    #[error("parameter '{param}' of tool '{tool}' must not be empty")]
    EmptyParam {
        tool: &'static str,
        param: &'static str,
    },
}

#[derive(Debug, Deserialize)]
struct ListPublicReposParams {
    username: String,
}

#[derive(Debug, Deserialize)]
struct ListIssuesParams {
    owner: String,
    repo: String,
    #[serde(default)]
    state: IssueState,
}

#[derive(Debug, Deserialize)]
struct CreateIssueParams {
    owner: String,
    repo: String,
    title: String,
    body: String,
    #[serde(default)]
    labels: Vec<String>,
}

/// Routes a named tool call from the host to the matching interactor.
pub struct ToolRouter<G: GitHubApi + Send + Sync + 'static> {
    list_public_repos: ListPublicReposInteractor<G>,
    list_issues: ListIssuesInteractor<G>,
    create_issue: CreateIssueInteractor<G>,
}

impl<G: GitHubApi + Send + Sync + 'static> ToolRouter<G> {
    pub fn new(github_api: Arc<G>, token: Option<String>) -> Self {
        Self {
            list_public_repos: ListPublicReposInteractor::new(github_api.clone()),
            list_issues: ListIssuesInteractor::new(github_api.clone()),
            create_issue: CreateIssueInteractor::new(github_api, token),
        }
    }

    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolOutcome, ToolDispatchError> {
        match name {
            LIST_PUBLIC_REPOS => {
                let params: ListPublicReposParams = decode(LIST_PUBLIC_REPOS, arguments)?;
                require_non_empty(LIST_PUBLIC_REPOS, "username", &params.username)?;
                Ok(self
                    .list_public_repos
                    .execute(ListPublicReposUseCaseInput {
                        username: params.username,
                    })
                    .await)
            }
            LIST_ISSUES => {
                let params: ListIssuesParams = decode(LIST_ISSUES, arguments)?;
                require_non_empty(LIST_ISSUES, "owner", &params.owner)?;
                require_non_empty(LIST_ISSUES, "repo", &params.repo)?;
                Ok(self
                    .list_issues
                    .execute(ListIssuesUseCaseInput {
                        owner: params.owner,
                        repo: params.repo,
                        state: params.state,
                    })
                    .await)
            }
            CREATE_ISSUE => {
                let params: CreateIssueParams = decode(CREATE_ISSUE, arguments)?;
                require_non_empty(CREATE_ISSUE, "owner", &params.owner)?;
                require_non_empty(CREATE_ISSUE, "repo", &params.repo)?;
                Ok(self
                    .create_issue
                    .execute(CreateIssueUseCaseInput {
                        owner: params.owner,
                        repo: params.repo,
                        title: params.title,
                        body: params.body,
                        labels: params.labels,
                    })
                    .await)
            }
            other => Err(ToolDispatchError::UnknownTool(other.to_string())),
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    tool: &str,
    arguments: Value,
) -> Result<T, ToolDispatchError> {
    serde_json::from_value(arguments).map_err(|source| ToolDispatchError::InvalidParams {
        tool: tool.to_string(),
        source,
    })
}

fn require_non_empty(
    tool: &'static str,
    param: &'static str,
    value: &str,
) -> Result<(), ToolDispatchError> {
    if value.trim().is_empty() {
        return Err(ToolDispatchError::EmptyParam { tool, param });
    }
    Ok(())
}
