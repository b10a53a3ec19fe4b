use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{errors::DomainError, todo::Todo},
    infrastructure::TodoStore,
};

/// Test double for [`TodoStore`]; ids are UUID v4 strings.
#[derive(Default)]
pub struct InMemoryTodoStore {
    todos_by_id: RwLock<HashMap<String, Todo>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn list_all(&self) -> Result<Vec<Todo>, DomainError> {
        Ok(self.todos_by_id.read().await.values().cloned().collect())
    }

    async fn create(&self, text: String) -> Result<Todo, DomainError> {
        let todo = Todo {
            id: Uuid::new_v4().to_string(),
            text,
            complete: false,
        };

        self.todos_by_id
            .write()
            .await
            .insert(todo.id.clone(), todo.clone());

        Ok(todo)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, DomainError> {
        Ok(self.todos_by_id.read().await.get(id).cloned())
    }

    async fn save(&self, todo: Todo) -> Result<Todo, DomainError> {
        self.todos_by_id
            .write()
            .await
            .insert(todo.id.clone(), todo.clone());

        Ok(todo)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, DomainError> {
        Ok(self.todos_by_id.write().await.remove(id).is_some())
    }
}
