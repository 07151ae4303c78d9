//! List and todo operations over a single session's state.
//!
//! Every function here is a pure mutation of [`SessionState`]; flash messages
//! and HTTP responses are the controllers' business.

use crate::error::TodoError;
use crate::services::validation::{validate_list_name, validate_todo_name};
use todo_session::{next_id, SessionState, Todo, TodoList};

/// Parse an id taken from a URL path. Anything that is not a positive integer
/// becomes 0, which never matches because ids start at 1.
pub fn path_id(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(0)
}

pub fn list_all(session: &SessionState) -> &[TodoList] {
    &session.lists
}

pub fn find_list(session: &SessionState, list_id: u64) -> Result<&TodoList, TodoError> {
    session
        .find_list(list_id)
        .ok_or(TodoError::ListNotFound(list_id))
}

fn find_list_mut(session: &mut SessionState, list_id: u64) -> Result<&mut TodoList, TodoError> {
    session
        .find_list_mut(list_id)
        .ok_or(TodoError::ListNotFound(list_id))
}

/// Returns the id of the new list.
pub fn create_list(session: &mut SessionState, name: &str) -> Result<u64, TodoError> {
    let name = name.trim();
    validate_list_name(name, &session.lists)?;

    let id = next_id(&session.lists);
    session.lists.push(TodoList::new(id, name));
    Ok(id)
}

/// The new name is checked against every list, the renamed one included, so
/// submitting a list's current name is rejected as a duplicate.
pub fn rename_list(session: &mut SessionState, list_id: u64, new_name: &str) -> Result<(), TodoError> {
    find_list(session, list_id)?;
    let new_name = new_name.trim();
    validate_list_name(new_name, &session.lists)?;

    find_list_mut(session, list_id)?.name = new_name.to_string();
    Ok(())
}

/// Returns the removed list, if one matched.
pub fn delete_list(session: &mut SessionState, list_id: u64) -> Option<TodoList> {
    let index = session.lists.iter().position(|list| list.id == list_id)?;
    Some(session.lists.remove(index))
}

/// Returns the id of the new todo.
pub fn add_todo(session: &mut SessionState, list_id: u64, text: &str) -> Result<u64, TodoError> {
    let list = find_list_mut(session, list_id)?;
    let text = text.trim();
    validate_todo_name(text)?;

    let id = next_id(&list.todos);
    list.todos.push(Todo::new(id, text));
    Ok(id)
}

/// Returns the removed todo, if one matched. A missing todo is not an error.
pub fn delete_todo(
    session: &mut SessionState,
    list_id: u64,
    todo_id: u64,
) -> Result<Option<Todo>, TodoError> {
    let list = find_list_mut(session, list_id)?;
    let removed = list
        .todos
        .iter()
        .position(|todo| todo.id == todo_id)
        .map(|index| list.todos.remove(index));
    Ok(removed)
}

/// Sets the todo to the opposite of what the form reported, not the opposite
/// of what is stored. A form that says `"true"` always leaves the todo
/// incomplete. Returns the new completion state.
pub fn toggle_todo(
    session: &mut SessionState,
    list_id: u64,
    todo_id: u64,
    requested_completed: &str,
) -> Result<bool, TodoError> {
    let list = find_list_mut(session, list_id)?;
    let todo = list
        .find_todo_mut(todo_id)
        .ok_or(TodoError::TodoNotFound { list_id, todo_id })?;

    todo.completed = requested_completed.trim() != "true";
    Ok(todo.completed)
}

pub fn complete_all(session: &mut SessionState, list_id: u64) -> Result<(), TodoError> {
    let list = find_list_mut(session, list_id)?;
    for todo in &mut list.todos {
        todo.completed = true;
    }
    Ok(())
}
