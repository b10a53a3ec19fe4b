use std::sync::Arc;

use crate::{
    application::dto::{CreateTodoRequest, DeleteTodoResponse, TodoResponse, UpdateTodoRequest},
    domain::errors::DomainError,
    infrastructure::TodoStore,
};

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub async fn list_todos(&self) -> Result<Vec<TodoResponse>, DomainError> {
        let todos = self.store.list_all().await?;
        Ok(todos.into_iter().map(TodoResponse::from).collect())
    }

    pub async fn create_todo(
        &self,
        request: CreateTodoRequest,
    ) -> Result<TodoResponse, DomainError> {
        let text = request.validated_text()?;
        let created = self.store.create(text).await?;
        Ok(TodoResponse::from(created))
    }

    pub async fn toggle_todo(&self, id: &str) -> Result<TodoResponse, DomainError> {
        let Some(mut todo) = self.store.find_by_id(id).await? else {
            return Err(DomainError::not_found("Task not found"));
        };

        todo.complete = !todo.complete;
        let saved = self.store.save(todo).await?;
        Ok(TodoResponse::from(saved))
    }

    pub async fn update_todo(
        &self,
        id: &str,
        request: UpdateTodoRequest,
    ) -> Result<TodoResponse, DomainError> {
        let text = request.validated_text()?;

        let Some(mut todo) = self.store.find_by_id(id).await? else {
            return Err(DomainError::not_found("Task not found"));
        };

        todo.text = text;
        let saved = self.store.save(todo).await?;
        Ok(TodoResponse::from(saved))
    }

    pub async fn delete_todo(&self, id: &str) -> Result<DeleteTodoResponse, DomainError> {
        let Some(todo) = self.store.find_by_id(id).await? else {
            return Err(DomainError::not_found("Task not found"));
        };

        // A concurrent delete may have won the race between the lookup
        // and the removal; report it the same way as a stale id.
        if !self.store.delete_by_id(id).await? {
            return Err(DomainError::not_found("Task not found"));
        }

        Ok(DeleteTodoResponse {
            result: TodoResponse::from(todo),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::in_memory_todo_store::InMemoryTodoStore;

    fn service() -> TodoService {
        TodoService::new(Arc::new(InMemoryTodoStore::new()))
    }

    #[tokio::test]
    async fn create_defaults_to_incomplete() {
        let service = service();
        let created = service
            .create_todo(CreateTodoRequest {
                text: Some("Buy milk".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(created.text, "Buy milk");
        assert!(!created.complete);
        assert!(!created.id.is_empty());
    }

    #[tokio::test]
    async fn toggle_is_its_own_inverse() {
        let service = service();
        let created = service
            .create_todo(CreateTodoRequest {
                text: Some("Water plants".to_string()),
            })
            .await
            .unwrap();

        let toggled = service.toggle_todo(&created.id).await.unwrap();
        assert!(toggled.complete);

        let toggled_back = service.toggle_todo(&created.id).await.unwrap();
        assert!(!toggled_back.complete);
    }

    #[tokio::test]
    async fn update_replaces_text_and_nothing_else() {
        let service = service();
        let created = service
            .create_todo(CreateTodoRequest {
                text: Some("Old text".to_string()),
            })
            .await
            .unwrap();
        service.toggle_todo(&created.id).await.unwrap();

        let updated = service
            .update_todo(
                &created.id,
                UpdateTodoRequest {
                    text: Some("New text".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.text, "New text");
        assert!(updated.complete);
    }

    #[tokio::test]
    async fn operations_on_absent_ids_return_not_found() {
        let service = service();

        assert!(matches!(
            service.toggle_todo("missing").await,
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            service
                .update_todo(
                    "missing",
                    UpdateTodoRequest {
                        text: Some("text".to_string())
                    }
                )
                .await,
            Err(DomainError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_todo("missing").await,
            Err(DomainError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn invalid_update_leaves_store_untouched() {
        let service = service();
        let created = service
            .create_todo(CreateTodoRequest {
                text: Some("Keep me".to_string()),
            })
            .await
            .unwrap();

        let result = service
            .update_todo(&created.id, UpdateTodoRequest { text: None })
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let todos = service.list_todos().await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "Keep me");
    }

    #[tokio::test]
    async fn delete_returns_the_removed_todo() {
        let service = service();
        let created = service
            .create_todo(CreateTodoRequest {
                text: Some("Throw away".to_string()),
            })
            .await
            .unwrap();

        let deleted = service.delete_todo(&created.id).await.unwrap();
        assert_eq!(deleted.result.id, created.id);
        assert_eq!(deleted.result.text, "Throw away");

        assert!(service.list_todos().await.unwrap().is_empty());
    }
}
