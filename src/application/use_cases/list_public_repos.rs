use crate::application::use_cases::outcome::ToolOutcome;
use crate::domain::external_apis::github::GitHubApi;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ListPublicReposUseCaseInput {
    pub username: String,
}

#[async_trait]
pub trait ListPublicReposUseCase {
    async fn execute(&self, input: ListPublicReposUseCaseInput) -> ToolOutcome;
}

pub struct ListPublicReposInteractor<G: GitHubApi + Send + Sync + 'static> {
    github_api: Arc<G>,
}

impl<G: GitHubApi + Send + Sync + 'static> ListPublicReposInteractor<G> {
    pub fn new(github_api: Arc<G>) -> Self {
        Self { github_api }
    }
}

#[async_trait]
impl<G: GitHubApi + Send + Sync + 'static> ListPublicReposUseCase for ListPublicReposInteractor<G> {
    #[tracing::instrument(name = "list_public_repos", skip(self))]
    async fn execute(&self, input: ListPublicReposUseCaseInput) -> ToolOutcome {
        match self
            .github_api
            .list_public_repositories(&input.username)
            .await
        {
            Ok(repos) if repos.is_empty() => ToolOutcome::Empty(format!(
                "No public repositories found for user '{}'.",
                input.username
            )),
            Ok(repos) => ToolOutcome::Success(
                repos
                    .iter()
                    .map(|repo| repo.name.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Err(error) => {
                tracing::error!(
                    "Failed to list repositories for {}: {:#}",
                    input.username,
                    error
                );
                ToolOutcome::Failure(format!(
                    "Unable to fetch repositories for user '{}'.",
                    input.username
                ))
            }
        }
    }
}
