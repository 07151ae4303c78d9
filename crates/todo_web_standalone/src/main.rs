use std::path::PathBuf;

use clap::Parser;
use todo_web::WebConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Session-backed to-do list web application
#[derive(Debug, Parser)]
#[command(name = "todo-web", version)]
struct Cli {
    /// Address to bind
    #[arg(long, env = "APP_HOST")]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long, env = "APP_PORT")]
    port: Option<u16>,

    /// Number of HTTP workers
    #[arg(long, env = "APP_WORKERS")]
    workers: Option<usize>,

    /// Keep sessions as JSON files in this directory instead of in memory
    #[arg(long, env = "SESSION_DIR")]
    session_dir: Option<PathBuf>,
}

impl Cli {
    fn into_config(self, mut config: WebConfig) -> WebConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(workers) = self.workers.filter(|n| *n > 0) {
            config.workers = workers;
        }
        if self.session_dir.is_some() {
            config.session_dir = self.session_dir;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .with_file(false),
        )
        .init();

    let config = Cli::parse().into_config(WebConfig::from_env());
    tracing::info!(?config, "Starting todo web service");

    if let Err(e) = todo_web::server::run(config).await {
        tracing::error!("Failed to run web service: {:#}", e);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_environment_config() {
        let cli = Cli::parse_from(["todo-web", "--port", "9100", "--session-dir", "/tmp/s"]);
        let config = cli.into_config(WebConfig::default());
        assert_eq!(config.port, 9100);
        assert_eq!(config.session_dir, Some(PathBuf::from("/tmp/s")));
    }

    #[test]
    fn test_zero_workers_flag_is_ignored() {
        let cli = Cli::parse_from(["todo-web", "--workers", "0"]);
        let config = cli.into_config(WebConfig::default());
        assert_eq!(config.workers, WebConfig::default().workers);
    }
}
