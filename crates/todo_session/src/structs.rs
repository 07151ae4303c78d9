//! Session data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Anything addressed by a numeric id inside its parent collection.
pub trait HasId {
    fn id(&self) -> u64;
}

/// Next id for a collection: the largest existing id plus one, or 1 when empty.
pub fn next_id<T: HasId>(items: &[T]) -> u64 {
    items.iter().map(HasId::id).max().unwrap_or(0) + 1
}

/// A single to-do item, owned by exactly one list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

impl HasId for Todo {
    fn id(&self) -> u64 {
        self.id
    }
}

/// A named, ordered collection of todos
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoList {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

impl TodoList {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            todos: Vec::new(),
        }
    }

    pub fn find_todo_mut(&mut self, todo_id: u64) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == todo_id)
    }
}

impl HasId for TodoList {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Flash messages taken out of the session for a single render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    pub error: Option<String>,
    pub success: Option<String>,
}

impl Flash {
    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.success.is_none()
    }
}

/// Everything one browser session owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Lists in creation order
    #[serde(default)]
    pub lists: Vec<TodoList>,

    /// One-shot error message for the next render
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// One-shot success message for the next render
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,

    /// Last time the session was written back to storage
    pub last_updated: DateTime<Utc>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            lists: Vec::new(),
            error: None,
            success: None,
            last_updated: Utc::now(),
        }
    }
}

impl SessionState {
    pub fn find_list(&self, list_id: u64) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    pub fn find_list_mut(&mut self, list_id: u64) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|list| list.id == list_id)
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
    }

    /// Removes both flash messages, handing them to the caller.
    pub fn take_flash(&mut self) -> Flash {
        Flash {
            error: self.error.take(),
            success: self.success.take(),
        }
    }

    /// A blank session holds nothing worth storing; opening an unknown id
    /// yields exactly this.
    pub fn is_blank(&self) -> bool {
        self.lists.is_empty() && self.error.is_none() && self.success.is_none()
    }

    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}
