use async_trait::async_trait;

use crate::domain::{errors::DomainError, todo::Todo};

pub mod in_memory_todo_store;
pub mod mongo_todo_store;

/// Boundary between the domain operations and the document database.
///
/// Each call is a single round trip against the backing store; driver
/// faults surface as `DomainError::Storage`, never as `NotFound`.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Todo>, DomainError>;
    async fn create(&self, text: String) -> Result<Todo, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, DomainError>;
    async fn save(&self, todo: Todo) -> Result<Todo, DomainError>;
    async fn delete_by_id(&self, id: &str) -> Result<bool, DomainError>;
}
