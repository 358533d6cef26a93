use crate::application::use_cases::outcome::ToolOutcome;
use crate::domain::external_apis::github::GitHubApi;
use crate::domain::models::issue::NewIssue;
use async_trait::async_trait;
use std::sync::Arc;

/// Returned when the operation is invoked without a configured credential.
const TOKEN_MISSING_TEXT: &str = "GitHub token not set in environment variable 'GITHUB_TOKEN'.";

#[derive(Debug, Clone)]
pub struct CreateIssueUseCaseInput {
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

#[async_trait]
pub trait CreateIssueUseCase {
    async fn execute(&self, input: CreateIssueUseCaseInput) -> ToolOutcome;
}

pub struct CreateIssueInteractor<G: GitHubApi + Send + Sync + 'static> {
    github_api: Arc<G>,
    // Injected at construction; the interactor never reads the environment.
    token: Option<String>,
}

impl<G: GitHubApi + Send + Sync + 'static> CreateIssueInteractor<G> {
    pub fn new(github_api: Arc<G>, token: Option<String>) -> Self {
        Self {
            github_api,
            token: token.filter(|token| !token.trim().is_empty()),
        }
    }
}

#[async_trait]
impl<G: GitHubApi + Send + Sync + 'static> CreateIssueUseCase for CreateIssueInteractor<G> {
    #[tracing::instrument(name = "create_issue", skip(self))]
    async fn execute(&self, input: CreateIssueUseCaseInput) -> ToolOutcome {
        // Pre-flight: a missing credential fails before any network call.
        let Some(token) = self.token.as_deref() else {
            return ToolOutcome::Failure(TOKEN_MISSING_TEXT.to_string());
        };

        let issue = NewIssue {
            title: input.title,
            body: input.body,
            labels: input.labels,
        };

        match self
            .github_api
            .create_issue(token, &input.owner, &input.repo, &issue)
            .await
        {
            Ok(created) => ToolOutcome::Success(format!(
                "Issue created: #{} - {} → {}",
                created.number, created.title, created.html_url
            )),
            Err(error) => {
                tracing::error!(
                    "Failed to create issue in {}/{}: {:#}",
                    input.owner,
                    input.repo,
                    error
                );
                ToolOutcome::Failure(format!(
                    "Failed to create issue in '{}/{}'.",
                    input.owner, input.repo
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::external_apis::github::Repository;
    use crate::domain::models::issue::{CreatedIssue, Issue, IssueState};
    use anyhow::{Error, anyhow};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubGitHubApi {
        created: Result<CreatedIssue, String>,
        calls: AtomicUsize,
        seen_issue: Mutex<Option<NewIssue>>,
    }

    impl StubGitHubApi {
        fn returning(created: Result<CreatedIssue, String>) -> Self {
            Self {
                created,
                calls: AtomicUsize::new(0),
                seen_issue: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl GitHubApi for StubGitHubApi {
        async fn list_public_repositories(&self, _username: &str) -> Result<Vec<Repository>, Error> {
            Err(anyhow!("not used by this use case"))
        }

        async fn list_issues(
            &self,
            _owner: &str,
            _repo: &str,
            _state: IssueState,
        ) -> Result<Vec<Issue>, Error> {
            Err(anyhow!("not used by this use case"))
        }

        async fn create_issue(
            &self,
            _token: &str,
            _owner: &str,
            _repo: &str,
            issue: &NewIssue,
        ) -> Result<CreatedIssue, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut seen) = self.seen_issue.lock() {
                *seen = Some(issue.clone());
            }
            match &self.created {
                Ok(created) => Ok(created.clone()),
                Err(message) => Err(anyhow!(message.clone())),
            }
        }
    }

    fn input() -> CreateIssueUseCaseInput {
        CreateIssueUseCaseInput {
            owner: "rust-lang".to_string(),
            repo: "cargo".to_string(),
            title: "Bug X".to_string(),
            body: "It broke.".to_string(),
            labels: vec![],
        }
    }

    #[tokio::test]
    async fn missing_token_fails_without_any_remote_call() {
        let api = Arc::new(StubGitHubApi::returning(Err("unreachable".to_string())));
        let interactor = CreateIssueInteractor::new(api.clone(), None);

        let outcome = interactor.execute(input()).await;

        assert_eq!(outcome, ToolOutcome::Failure(TOKEN_MISSING_TEXT.to_string()));
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_token_is_treated_as_missing() {
        let api = Arc::new(StubGitHubApi::returning(Err("unreachable".to_string())));
        let interactor = CreateIssueInteractor::new(api.clone(), Some("   ".to_string()));

        let outcome = interactor.execute(input()).await;

        assert_eq!(outcome, ToolOutcome::Failure(TOKEN_MISSING_TEXT.to_string()));
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn success_reports_number_title_and_url() {
        let api = Arc::new(StubGitHubApi::returning(Ok(CreatedIssue {
            number: 42,
            title: "Bug X".to_string(),
            html_url: "https://x/42".to_string(),
        })));
        let interactor = CreateIssueInteractor::new(api, Some("ghp_token".to_string()));

        let outcome = interactor.execute(input()).await;

        assert_eq!(
            outcome,
            ToolOutcome::Success("Issue created: #42 - Bug X → https://x/42".to_string())
        );
    }

    #[tokio::test]
    async fn caller_supplied_labels_are_forwarded() {
        let api = Arc::new(StubGitHubApi::returning(Ok(CreatedIssue {
            number: 1,
            title: "Bug X".to_string(),
            html_url: "https://x/1".to_string(),
        })));
        let interactor = CreateIssueInteractor::new(api.clone(), Some("ghp_token".to_string()));

        let mut request = input();
        request.labels = vec!["bug".to_string(), "triage".to_string()];
        interactor.execute(request).await;

        let seen = api.seen_issue.lock().map(|seen| seen.clone());
        assert!(matches!(
            seen,
            Ok(Some(issue)) if issue.labels == vec!["bug".to_string(), "triage".to_string()]
        ));
    }

    #[tokio::test]
    async fn remote_failure_collapses_to_redacted_text() {
        let api = Arc::new(StubGitHubApi::returning(Err(
            "422 Unprocessable Entity".to_string()
        )));
        let interactor = CreateIssueInteractor::new(api, Some("ghp_token".to_string()));

        let outcome = interactor.execute(input()).await;

        assert_eq!(
            outcome,
            ToolOutcome::Failure("Failed to create issue in 'rust-lang/cargo'.".to_string())
        );
    }
}
