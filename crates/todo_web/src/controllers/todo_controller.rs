use actix_web::{http::StatusCode, post, web, HttpRequest, HttpResponse};

use crate::controllers::{is_async_client, redirect, redirect_not_found};
use crate::dto::{AddTodoForm, ToggleTodoForm};
use crate::error::{AppError, TodoError};
use crate::middleware::SessionId;
use crate::server::AppState;
use crate::services::list_service::{self, path_id};
use crate::views::{self, pages};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add_todo)
        .service(delete_todo)
        .service(toggle_todo)
        .service(complete_all);
}

#[post("/lists/{list_id}/todos")]
pub async fn add_todo(
    state: web::Data<AppState>,
    session_id: SessionId,
    path: web::Path<String>,
    form: Option<web::Form<AddTodoForm>>,
) -> Result<HttpResponse, AppError> {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    let list_id = path_id(&path);
    let mut session = state.sessions.open(session_id.as_str()).await?;

    let response = match list_service::add_todo(&mut session, list_id, &form.todo) {
        Ok(todo_id) => {
            tracing::info!(list_id, todo_id, "Todo added");
            session.set_success("The todo was added.");
            redirect(&format!("/lists/{list_id}"))
        }
        Err(e @ TodoError::ListNotFound(_)) => redirect_not_found(&mut session, e),
        Err(e) => {
            tracing::warn!(list_id, "Rejected todo: {}", e);
            session.set_error(e.to_string());
            let flash = session.take_flash();
            match list_service::find_list(&session, list_id) {
                Ok(list) => views::render(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    pages::list_detail(&flash, list, form.todo.trim()),
                ),
                Err(e) => redirect_not_found(&mut session, e),
            }
        }
    };

    state.sessions.commit(session_id.as_str(), &mut session).await?;
    Ok(response)
}

#[post("/lists/{list_id}/todos/{id}/delete")]
pub async fn delete_todo(
    req: HttpRequest,
    state: web::Data<AppState>,
    session_id: SessionId,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (list_id, todo_id) = (path_id(&path.0), path_id(&path.1));
    let mut session = state.sessions.open(session_id.as_str()).await?;

    let response = match list_service::delete_todo(&mut session, list_id, todo_id) {
        Ok(removed) => {
            if let Some(todo) = &removed {
                tracing::info!(list_id, todo_id, name = %todo.name, "Todo deleted");
            }
            if is_async_client(&req) {
                HttpResponse::NoContent().finish()
            } else {
                let message = match removed {
                    Some(todo) => format!("The {} todo has been deleted.", todo.name),
                    None => "The todo has been deleted.".to_string(),
                };
                session.set_success(message);
                redirect(&format!("/lists/{list_id}"))
            }
        }
        Err(e) => redirect_not_found(&mut session, e),
    };

    state.sessions.commit(session_id.as_str(), &mut session).await?;
    Ok(response)
}

#[post("/lists/{list_id}/todos/{id}")]
pub async fn toggle_todo(
    state: web::Data<AppState>,
    session_id: SessionId,
    path: web::Path<(String, String)>,
    form: Option<web::Form<ToggleTodoForm>>,
) -> Result<HttpResponse, AppError> {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    let (list_id, todo_id) = (path_id(&path.0), path_id(&path.1));
    let mut session = state.sessions.open(session_id.as_str()).await?;

    let response =
        match list_service::toggle_todo(&mut session, list_id, todo_id, &form.completed) {
            Ok(completed) => {
                tracing::info!(list_id, todo_id, completed, "Todo updated");
                session.set_success("The todo has been updated.");
                redirect(&format!("/lists/{list_id}"))
            }
            Err(e) => redirect_not_found(&mut session, e),
        };

    state.sessions.commit(session_id.as_str(), &mut session).await?;
    Ok(response)
}

#[post("/lists/{list_id}/all_completed")]
pub async fn complete_all(
    state: web::Data<AppState>,
    session_id: SessionId,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let list_id = path_id(&path);
    let mut session = state.sessions.open(session_id.as_str()).await?;

    let response = match list_service::complete_all(&mut session, list_id) {
        Ok(()) => {
            tracing::info!(list_id, "All todos completed");
            session.set_success("All todos have been completed.");
            redirect(&format!("/lists/{list_id}"))
        }
        Err(e) => redirect_not_found(&mut session, e),
    };

    state.sessions.commit(session_id.as_str(), &mut session).await?;
    Ok(response)
}
