/// The sole domain entity: one task with text and completion status.
///
/// `id` is opaque and owned by the storage layer; it is generated at
/// creation time and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub complete: bool,
}
