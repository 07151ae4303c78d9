//! Server-rendered pages and the view-model helpers they share.

pub mod assets;
pub mod html;
pub mod pages;

use actix_web::{http::StatusCode, HttpResponse};
use todo_session::{Todo, TodoList};

/// True iff the list has todos and every one is completed. An empty list is
/// never complete.
pub fn is_list_complete(todos: &[Todo]) -> bool {
    !todos.is_empty() && todos.iter().all(|todo| todo.completed)
}

pub fn remaining_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

/// Incomplete lists first, complete lists last; order within each group is kept.
pub fn sorted_lists(lists: &[TodoList]) -> Vec<&TodoList> {
    let (complete, incomplete): (Vec<&TodoList>, Vec<&TodoList>) =
        lists.iter().partition(|list| is_list_complete(&list.todos));
    incomplete.into_iter().chain(complete).collect()
}

/// Incomplete todos first, completed last, each paired with its index in the
/// original collection.
pub fn sorted_todos(todos: &[Todo]) -> Vec<(&Todo, usize)> {
    let (complete, incomplete): (Vec<_>, Vec<_>) = todos
        .iter()
        .enumerate()
        .map(|(index, todo)| (todo, index))
        .partition(|(todo, _)| todo.completed);
    incomplete.into_iter().chain(complete).collect()
}

pub fn render(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u64, completed: bool) -> Todo {
        Todo {
            id,
            name: format!("todo {id}"),
            completed,
        }
    }

    fn list(id: u64, todos: Vec<Todo>) -> TodoList {
        TodoList {
            id,
            name: format!("list {id}"),
            todos,
        }
    }

    #[test]
    fn test_empty_list_is_never_complete() {
        assert!(!is_list_complete(&[]));
        assert!(is_list_complete(&[todo(1, true)]));
        assert!(!is_list_complete(&[todo(1, true), todo(2, false)]));
    }

    #[test]
    fn test_remaining_count() {
        assert_eq!(remaining_count(&[]), 0);
        assert_eq!(
            remaining_count(&[todo(1, false), todo(2, true), todo(3, false)]),
            2
        );
    }

    #[test]
    fn test_sorted_lists_puts_complete_last_stably() {
        let lists = vec![
            list(1, vec![todo(1, true)]),
            list(2, vec![]),
            list(3, vec![todo(1, false)]),
            list(4, vec![todo(1, true), todo(2, true)]),
            list(5, vec![todo(1, true), todo(2, false)]),
        ];

        let ids: Vec<u64> = sorted_lists(&lists).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 3, 5, 1, 4]);

        let sorted = sorted_lists(&lists);
        let first_complete = sorted
            .iter()
            .position(|l| is_list_complete(&l.todos))
            .unwrap();
        assert!(sorted[first_complete..]
            .iter()
            .all(|l| is_list_complete(&l.todos)));
    }

    #[test]
    fn test_sorted_todos_keeps_original_index() {
        let todos = vec![todo(10, true), todo(11, false), todo(12, true), todo(13, false)];
        let order: Vec<(u64, usize)> = sorted_todos(&todos)
            .into_iter()
            .map(|(t, index)| (t.id, index))
            .collect();
        assert_eq!(order, vec![(11, 1), (13, 3), (10, 0), (12, 2)]);
    }
}
