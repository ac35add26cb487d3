use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::database::activities_repo::ActivitiesRepo;
use crate::database::seed::{self, SeedError};
use crate::web::routes::activities;

pub const LANDING_PAGE: &str = "/static/index.html";

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

pub fn build_router(repo: ActivitiesRepo, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(LANDING_PAGE) }))
        .route("/activities", get(activities::list_activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(activities::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(repo)
}

/// Seeds the directory, binds the listener and serves until the process ends.
pub async fn run(config: Config) -> Result<(), StartupError> {
    let activities = match &config.seed_file {
        Some(path) => {
            info!(path = %path.display(), "loading activities from seed file");
            seed::load_seed_file(path)?
        }
        None => seed::default_activities(),
    };
    info!(count = activities.len(), "activity directory ready");

    let app = build_router(ActivitiesRepo::new(activities), &config.static_dir);
    let listener = bind_listener(&config).await?;

    info!(
        addr = %listener.local_addr()?,
        build_id = env!("ACTIVITY_SIGNUP_BUILD_ID"),
        "server listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}

// One retry on the next port, so a stale dev server doesn't block startup.
async fn bind_listener(config: &Config) -> Result<TcpListener, StartupError> {
    let primary = format!("{}:{}", config.host, config.port);
    let err = match TcpListener::bind(primary.as_str()).await {
        Ok(listener) => return Ok(listener),
        Err(e) => e,
    };

    let Some(fallback_port) = config.fallback_port() else {
        return Err(StartupError::Bind {
            addr: primary,
            source: err,
        });
    };
    let fallback = format!("{}:{}", config.host, fallback_port);
    warn!(addr = %primary, error = %err, fallback = %fallback, "bind failed, trying fallback port");

    TcpListener::bind(fallback.as_str())
        .await
        .map_err(|source| StartupError::Bind {
            addr: fallback,
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_falls_back_to_next_port() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        // The fallback port may itself be in use on a busy machine; only
        // assert when it is free.
        if port == u16::MAX || std::net::TcpListener::bind(("127.0.0.1", port + 1)).is_err() {
            return;
        }
        let config = Config {
            port,
            ..Config::default()
        };
        let listener = bind_listener(&config).await.unwrap();
        assert_eq!(listener.local_addr().unwrap().port(), port + 1);
    }

    #[tokio::test]
    async fn missing_seed_file_fails_startup() {
        let config = Config {
            port: 0,
            seed_file: Some("/nonexistent/activity-signup/seed.json".into()),
            ..Config::default()
        };
        let err = run(config).await.unwrap_err();
        assert!(matches!(err, StartupError::Seed(SeedError::Read { .. })));
    }
}
