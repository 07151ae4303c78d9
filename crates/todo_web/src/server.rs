use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use todo_session::{FileSessionStorage, MemorySessionStorage, SessionManager, SessionStorage};
use tracing::{error, info};

use crate::config::WebConfig;
use crate::controllers::{list_controller, system_controller, todo_controller};
use crate::middleware::{SessionMiddleware, TracingMiddleware};

pub struct AppState {
    pub sessions: SessionManager,
}

impl AppState {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            sessions: SessionManager::new(storage),
        }
    }

    pub fn from_config(config: &WebConfig) -> Self {
        Self::new(build_storage(config))
    }
}

/// File-backed sessions when a directory is configured, otherwise an LRU in memory
pub fn build_storage(config: &WebConfig) -> Arc<dyn SessionStorage> {
    match &config.session_dir {
        Some(dir) => {
            info!("Storing sessions under {}", dir.display());
            Arc::new(FileSessionStorage::new(dir))
        }
        None => {
            info!(
                "Storing sessions in memory (capacity {})",
                config.session_capacity
            );
            Arc::new(MemorySessionStorage::new(config.session_capacity))
        }
    }
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(system_controller::config)
        .configure(list_controller::config)
        .configure(todo_controller::config);
}

pub async fn run(config: WebConfig) -> anyhow::Result<()> {
    info!("Starting web service...");

    let app_state = web::Data::new(AppState::from_config(&config));
    let cookie_name = config.cookie_name.clone();
    let address = config.bind_address();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(SessionMiddleware::new(cookie_name.clone()))
            .wrap(TracingMiddleware)
            .configure(app_config)
    })
    .workers(config.workers)
    .bind(&address)
    .with_context(|| format!("Failed to bind server to {address}"))?
    .run();

    info!("Starting web service on http://{address}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(e).context("Web server error");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_build_storage_prefers_configured_directory() {
        let dir = tempdir().unwrap();
        let config = WebConfig {
            session_dir: Some(dir.path().to_path_buf()),
            ..WebConfig::default()
        };

        let state = AppState::from_config(&config);
        let mut session = state.sessions.open("abc").await.unwrap();
        session.lists.push(todo_session::TodoList::new(1, "Work"));
        state.sessions.commit("abc", &mut session).await.unwrap();

        assert!(dir.path().join("abc.json").exists());
    }
}
