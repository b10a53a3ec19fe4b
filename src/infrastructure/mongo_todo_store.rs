use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{doc, oid::ObjectId},
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{errors::DomainError, todo::Todo},
    infrastructure::TodoStore,
};

const COLLECTION_NAME: &str = "todos";

/// Production [`TodoStore`] over a MongoDB collection.
pub struct MongoTodoStore {
    collection: Collection<TodoDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    text: String,
    complete: bool,
}

impl From<TodoDocument> for Todo {
    fn from(document: TodoDocument) -> Self {
        Self {
            id: document.id.to_hex(),
            text: document.text,
            complete: document.complete,
        }
    }
}

impl MongoTodoStore {
    /// Connects to the deployment and verifies it is reachable with a
    /// ping. Callers treat a failure here as fatal; the process must
    /// not serve traffic without its database.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, DomainError> {
        let client = Client::with_uri_str(uri).await.map_err(storage_error)?;
        let database = client.database(db_name);

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(storage_error)?;

        Ok(Self {
            collection: database.collection(COLLECTION_NAME),
        })
    }
}

#[async_trait]
impl TodoStore for MongoTodoStore {
    async fn list_all(&self) -> Result<Vec<Todo>, DomainError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(storage_error)?;
        let documents: Vec<TodoDocument> = cursor.try_collect().await.map_err(storage_error)?;

        Ok(documents.into_iter().map(Todo::from).collect())
    }

    async fn create(&self, text: String) -> Result<Todo, DomainError> {
        let document = TodoDocument {
            id: ObjectId::new(),
            text,
            complete: false,
        };

        self.collection
            .insert_one(&document)
            .await
            .map_err(storage_error)?;

        Ok(Todo::from(document))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Todo>, DomainError> {
        let object_id = parse_object_id(id)?;
        let found = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(storage_error)?;

        Ok(found.map(Todo::from))
    }

    async fn save(&self, todo: Todo) -> Result<Todo, DomainError> {
        let object_id = parse_object_id(&todo.id)?;
        let document = TodoDocument {
            id: object_id,
            text: todo.text.clone(),
            complete: todo.complete,
        };

        self.collection
            .replace_one(doc! { "_id": object_id }, &document)
            .await
            .map_err(storage_error)?;

        Ok(todo)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, DomainError> {
        let object_id = parse_object_id(id)?;
        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(storage_error)?;

        Ok(result.deleted_count > 0)
    }
}

// A malformed id is a storage-format fault, not a domain NotFound.
fn parse_object_id(id: &str) -> Result<ObjectId, DomainError> {
    ObjectId::parse_str(id)
        .map_err(|err| DomainError::storage(format!("malformed object id {id:?}: {err}")))
}

fn storage_error(err: mongodb::error::Error) -> DomainError {
    DomainError::storage(err.to_string())
}
