pub mod list_controller;
pub mod system_controller;
pub mod todo_controller;

use actix_web::{http::header, HttpRequest, HttpResponse};
use todo_session::SessionState;

use crate::error::TodoError;

pub const ASYNC_CLIENT_HEADER: &str = "X-Requested-With";

/// True when the request was issued by script rather than a page navigation.
pub(crate) fn is_async_client(req: &HttpRequest) -> bool {
    req.headers()
        .get(ASYNC_CLIENT_HEADER)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("XMLHttpRequest"))
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Flashes a lookup failure and redirects to the closest page that still exists.
pub(crate) fn redirect_not_found(session: &mut SessionState, error: TodoError) -> HttpResponse {
    tracing::warn!("Lookup failed: {:?}", error);
    let location = match &error {
        TodoError::TodoNotFound { list_id, .. } => format!("/lists/{list_id}"),
        _ => "/lists".to_string(),
    };
    session.set_error(error.to_string());
    redirect(&location)
}
