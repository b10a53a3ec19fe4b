pub mod errors;
pub mod todo;
