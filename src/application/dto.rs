use serde::{Deserialize, Serialize};

use crate::domain::{errors::DomainError, todo::Todo};

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl CreateTodoRequest {
    pub fn validated_text(self) -> Result<String, DomainError> {
        require_text(self.text)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl UpdateTodoRequest {
    pub fn validated_text(self) -> Result<String, DomainError> {
        require_text(self.text)
    }
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: String,
    pub text: String,
    pub complete: bool,
}

impl From<Todo> for TodoResponse {
    fn from(value: Todo) -> Self {
        Self {
            id: value.id,
            text: value.text,
            complete: value.complete,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    pub result: TodoResponse,
}

// The stored text is kept verbatim; trimming is only for the emptiness
// check.
fn require_text(text: Option<String>) -> Result<String, DomainError> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(DomainError::validation("Text field is required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_text_is_rejected() {
        let request = CreateTodoRequest { text: None };
        assert!(matches!(
            request.validated_text(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn blank_text_is_rejected() {
        for blank in ["", "   "] {
            let request = UpdateTodoRequest {
                text: Some(blank.to_string()),
            };
            assert!(matches!(
                request.validated_text(),
                Err(DomainError::Validation(_))
            ));
        }
    }

    #[test]
    fn text_is_passed_through_verbatim() {
        let request = CreateTodoRequest {
            text: Some("  Buy milk  ".to_string()),
        };
        assert_eq!(request.validated_text().unwrap(), "  Buy milk  ");
    }
}
