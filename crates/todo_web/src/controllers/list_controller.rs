use actix_web::{get, http::StatusCode, post, web, HttpRequest, HttpResponse};

use crate::controllers::{is_async_client, redirect, redirect_not_found};
use crate::dto::{CreateListForm, RenameListForm};
use crate::error::{AppError, TodoError};
use crate::middleware::SessionId;
use crate::server::AppState;
use crate::services::list_service::{self, path_id};
use crate::views::{self, pages};

pub fn config(cfg: &mut web::ServiceConfig) {
    // `/lists/new` must be registered ahead of `/lists/{id}`.
    cfg.service(index)
        .service(new_list_form)
        .service(create_list)
        .service(show_list)
        .service(edit_list_form)
        .service(rename_list)
        .service(delete_list);
}

#[get("/lists")]
pub async fn index(
    state: web::Data<AppState>,
    session_id: SessionId,
) -> Result<HttpResponse, AppError> {
    let mut session = state.sessions.open(session_id.as_str()).await?;

    let flash = session.take_flash();
    let body = pages::lists_index(&flash, list_service::list_all(&session));

    state.sessions.commit(session_id.as_str(), &mut session).await?;
    Ok(views::render(StatusCode::OK, body))
}

#[get("/lists/new")]
pub async fn new_list_form(
    state: web::Data<AppState>,
    session_id: SessionId,
) -> Result<HttpResponse, AppError> {
    let mut session = state.sessions.open(session_id.as_str()).await?;

    let flash = session.take_flash();
    let body = pages::new_list(&flash, "");

    state.sessions.commit(session_id.as_str(), &mut session).await?;
    Ok(views::render(StatusCode::OK, body))
}

#[post("/lists")]
pub async fn create_list(
    state: web::Data<AppState>,
    session_id: SessionId,
    form: Option<web::Form<CreateListForm>>,
) -> Result<HttpResponse, AppError> {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    let mut session = state.sessions.open(session_id.as_str()).await?;

    let response = match list_service::create_list(&mut session, &form.list_name) {
        Ok(list_id) => {
            tracing::info!(list_id, "List created");
            session.set_success("The list has been created.");
            redirect("/lists")
        }
        Err(e) => {
            tracing::warn!("Rejected list name: {}", e);
            session.set_error(e.to_string());
            let flash = session.take_flash();
            views::render(
                StatusCode::UNPROCESSABLE_ENTITY,
                pages::new_list(&flash, form.list_name.trim()),
            )
        }
    };

    state.sessions.commit(session_id.as_str(), &mut session).await?;
    Ok(response)
}

#[get("/lists/{id}")]
pub async fn show_list(
    state: web::Data<AppState>,
    session_id: SessionId,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let list_id = path_id(&path);
    let mut session = state.sessions.open(session_id.as_str()).await?;

    let response = match list_service::find_list(&session, list_id) {
        Ok(list) => {
            let list = list.clone();
            let flash = session.take_flash();
            views::render(StatusCode::OK, pages::list_detail(&flash, &list, ""))
        }
        Err(e) => redirect_not_found(&mut session, e),
    };

    state.sessions.commit(session_id.as_str(), &mut session).await?;
    Ok(response)
}

#[get("/lists/{id}/edit")]
pub async fn edit_list_form(
    state: web::Data<AppState>,
    session_id: SessionId,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let list_id = path_id(&path);
    let mut session = state.sessions.open(session_id.as_str()).await?;

    let response = match list_service::find_list(&session, list_id) {
        Ok(list) => {
            let list = list.clone();
            let flash = session.take_flash();
            views::render(StatusCode::OK, pages::edit_list(&flash, &list, &list.name))
        }
        Err(e) => redirect_not_found(&mut session, e),
    };

    state.sessions.commit(session_id.as_str(), &mut session).await?;
    Ok(response)
}

#[post("/lists/{id}/edit")]
pub async fn rename_list(
    state: web::Data<AppState>,
    session_id: SessionId,
    path: web::Path<String>,
    form: Option<web::Form<RenameListForm>>,
) -> Result<HttpResponse, AppError> {
    let form = form.map(web::Form::into_inner).unwrap_or_default();
    let list_id = path_id(&path);
    let mut session = state.sessions.open(session_id.as_str()).await?;

    let response = match list_service::rename_list(&mut session, list_id, &form.new_name) {
        Ok(()) => {
            tracing::info!(list_id, "List renamed");
            session.set_success("Your list name has been updated.");
            redirect(&format!("/lists/{list_id}"))
        }
        Err(e @ TodoError::ListNotFound(_)) => redirect_not_found(&mut session, e),
        Err(e) => {
            tracing::warn!(list_id, "Rejected new list name: {}", e);
            session.set_error(e.to_string());
            let flash = session.take_flash();
            match list_service::find_list(&session, list_id) {
                Ok(list) => views::render(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    pages::edit_list(&flash, list, form.new_name.trim()),
                ),
                Err(e) => redirect_not_found(&mut session, e),
            }
        }
    };

    state.sessions.commit(session_id.as_str(), &mut session).await?;
    Ok(response)
}

#[post("/lists/{id}/delete")]
pub async fn delete_list(
    req: HttpRequest,
    state: web::Data<AppState>,
    session_id: SessionId,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let list_id = path_id(&path);
    let mut session = state.sessions.open(session_id.as_str()).await?;

    match list_service::delete_list(&mut session, list_id) {
        Some(list) => tracing::info!(list_id, name = %list.name, "List deleted"),
        None => tracing::debug!(list_id, "Delete requested for missing list"),
    }
    session.set_success("The list has been deleted.");

    state.sessions.commit(session_id.as_str(), &mut session).await?;

    if is_async_client(&req) {
        Ok(HttpResponse::Ok().finish())
    } else {
        Ok(redirect("/lists"))
    }
}
