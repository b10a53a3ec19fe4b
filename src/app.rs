use axum::{
    Router,
    http::Method,
    routing::{delete, get, post, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    interface::http::todos_handler::{
        create_todo, delete_todo, list_todos, toggle_todo, update_todo,
    },
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list_todos))
        .route("/todo/new", post(create_todo))
        .route("/todo/delete/{id}", delete(delete_todo))
        .route("/todo/complete/{id}", get(toggle_todo))
        .route("/todo/update/{id}", put(update_todo))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        .with_state(state)
}
