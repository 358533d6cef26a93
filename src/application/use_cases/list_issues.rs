use crate::application::use_cases::outcome::ToolOutcome;
use crate::domain::external_apis::github::GitHubApi;
use crate::domain::models::issue::IssueState;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ListIssuesUseCaseInput {
    pub owner: String,
    pub repo: String,
    pub state: IssueState,
}

#[async_trait]
pub trait ListIssuesUseCase {
    async fn execute(&self, input: ListIssuesUseCaseInput) -> ToolOutcome;
}

pub struct ListIssuesInteractor<G: GitHubApi + Send + Sync + 'static> {
    github_api: Arc<G>,
}

impl<G: GitHubApi + Send + Sync + 'static> ListIssuesInteractor<G> {
    pub fn new(github_api: Arc<G>) -> Self {
        Self { github_api }
    }
}

#[async_trait]
impl<G: GitHubApi + Send + Sync + 'static> ListIssuesUseCase for ListIssuesInteractor<G> {
    #[tracing::instrument(name = "list_issues", skip(self))]
    async fn execute(&self, input: ListIssuesUseCaseInput) -> ToolOutcome {
        match self
            .github_api
            .list_issues(&input.owner, &input.repo, input.state)
            .await
        {
            Ok(issues) if issues.is_empty() => ToolOutcome::Empty(format!(
                "No {} issues found in '{}/{}'.",
                input.state, input.owner, input.repo
            )),
            Ok(issues) => ToolOutcome::Success(
                issues
                    .iter()
                    .map(|issue| format!("- #{}: {}", issue.number, issue.title))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Err(error) => {
                tracing::error!(
                    "Failed to list issues for {}/{}: {:#}",
                    input.owner,
                    input.repo,
                    error
                );
                ToolOutcome::Failure(format!(
                    "Unable to fetch issues for '{}/{}'.",
                    input.owner, input.repo
                ))
            }
        }
    }
}
