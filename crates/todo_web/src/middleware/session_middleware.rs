//! Binds every request to a browser session.
//!
//! The session id lives in a cookie. Requests without a usable cookie get a
//! fresh UUID, and the response carries the `Set-Cookie` for it. Handlers
//! pick the id up through the [`SessionId`] extractor.

use actix_web::{
    cookie::{Cookie, SameSite},
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use todo_session::storage::is_valid_session_id;
use uuid::Uuid;

use crate::error::AppError;

pub struct SessionMiddleware {
    cookie_name: Rc<str>,
}

impl SessionMiddleware {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: Rc::from(cookie_name.into()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            cookie_name: Rc::clone(&self.cookie_name),
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
    cookie_name: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let existing = req
            .cookie(&self.cookie_name)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| is_valid_session_id(value));

        let (session_id, issued) = match existing {
            Some(id) => (id, false),
            None => (Uuid::new_v4().to_string(), true),
        };

        req.extensions_mut().insert(SessionId(session_id.clone()));

        let cookie_name = self.cookie_name.to_string();
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let mut res = service.call(req).await?;

            if issued {
                let cookie = Cookie::build(cookie_name, session_id)
                    .path("/")
                    .http_only(true)
                    .same_site(SameSite::Lax)
                    .finish();
                if let Err(e) = res.response_mut().add_cookie(&cookie) {
                    tracing::warn!("Failed to set session cookie: {}", e);
                }
            }

            Ok(res)
        })
    }
}

/// Id of the session the current request belongs to
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for SessionId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<SessionId>()
                .cloned()
                .ok_or_else(|| {
                    AppError::InternalError(anyhow::anyhow!("Session middleware is not installed"))
                }),
        )
    }
}
