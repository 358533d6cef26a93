use serde::{Deserialize, Serialize};
use std::fmt;

/// An issue as listed from a repository's issue feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
}

/// Payload for opening a new issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// The fields of a freshly created issue that callers get told about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
}

/// Issue state filter accepted by the issues list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    #[default]
    Open,
    Closed,
    All,
}

impl IssueState {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
            IssueState::All => "all",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_state_defaults_to_open() {
        assert_eq!(IssueState::default(), IssueState::Open);
    }

    #[test]
    fn issue_state_deserializes_from_lowercase() {
        let state: Result<IssueState, _> = serde_json::from_str("\"closed\"");
        assert!(matches!(state, Ok(IssueState::Closed)));
    }

    #[test]
    fn issue_state_display_matches_query_value() {
        assert_eq!(IssueState::Open.to_string(), "open");
        assert_eq!(IssueState::Closed.to_string(), "closed");
        assert_eq!(IssueState::All.to_string(), "all");
    }
}
