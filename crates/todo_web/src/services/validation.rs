use crate::error::{NameKind, TodoError};
use todo_session::TodoList;

pub const MIN_NAME_LEN: usize = 1;
pub const MAX_NAME_LEN: usize = 100;

fn has_valid_length(name: &str) -> bool {
    (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name.chars().count())
}

/// A list name must fit the length bounds and not match any existing list exactly.
pub fn validate_list_name(name: &str, existing: &[TodoList]) -> Result<(), TodoError> {
    if !has_valid_length(name) {
        return Err(TodoError::InvalidLength(NameKind::List));
    }
    if existing.iter().any(|list| list.name == name) {
        return Err(TodoError::DuplicateName);
    }
    Ok(())
}

pub fn validate_todo_name(name: &str) -> Result<(), TodoError> {
    if !has_valid_length(name) {
        return Err(TodoError::InvalidLength(NameKind::Todo));
    }
    Ok(())
}
