use serde::Serialize;

/// Normalized result of a tool operation.
///
/// Every operation resolves to exactly one of these variants; remote
/// failures never cross the use case boundary as errors. `Empty` is kept
/// separate from `Success` so hosts can distinguish "worked, nothing there"
/// from a real listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum ToolOutcome {
    Success(String),
    Empty(String),
    Failure(String),
}

impl ToolOutcome {
    pub fn text(&self) -> &str {
        match self {
            ToolOutcome::Success(text) | ToolOutcome::Empty(text) | ToolOutcome::Failure(text) => {
                text
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_returns_inner_message_for_all_variants() {
        assert_eq!(ToolOutcome::Success("a".to_string()).text(), "a");
        assert_eq!(ToolOutcome::Empty("b".to_string()).text(), "b");
        assert_eq!(ToolOutcome::Failure("c".to_string()).text(), "c");
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(ToolOutcome::Empty("none".to_string()));
        assert!(matches!(json, Ok(value) if value["status"] == "empty" && value["text"] == "none"));
    }
}
