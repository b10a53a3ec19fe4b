pub mod error;
pub mod todos_handler;
