//! Form bodies posted by the HTML pages. Missing fields deserialize as empty
//! strings so they fall through to the length checks; a missing or unreadable
//! body is treated as a form with every field missing.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CreateListForm {
    #[serde(default)]
    pub list_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenameListForm {
    #[serde(default)]
    pub new_name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddTodoForm {
    #[serde(default)]
    pub todo: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ToggleTodoForm {
    #[serde(default)]
    pub completed: String,
}
