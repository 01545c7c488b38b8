use axum::http::{header, Method};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::{create_pool, migrations};
use crate::handlers;
use crate::state::AppState;

/// Build the application state and Axum router from a [`Config`].
///
/// Creates the database pool, runs migrations (which also seed the default categories) and
/// assembles the middleware stack.
pub fn build_app(config: Config) -> Result<(AppState, Router), Box<dyn std::error::Error>> {
    let db = create_pool(&config.database_path)?;

    {
        let conn = db.get()?;
        migrations::run_migrations(&conn, &config.migrations_path)?;
    }
    tracing::info!(path = %config.database_path.display(), "Database initialized");

    let state = AppState { db };

    Ok((state.clone(), router(state)))
}

pub fn router(state: AppState) -> Router {
    handlers::routes()
        .layer(cors_layer())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}

/// Bind the router to `host:port` and spawn the server as a tokio task.
///
/// Returns the port actually bound (useful when `port` is 0) and the server task handle.
pub async fn serve(
    app: Router,
    host: &str,
    port: u16,
) -> Result<(u16, JoinHandle<()>), Box<dyn std::error::Error>> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;
    let actual_port = listener.local_addr()?.port();

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok((actual_port, handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::queries::categories;
    use std::path::PathBuf;

    #[test]
    fn test_build_app_migrates_configured_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            host: "127.0.0.1".into(),
            port: 0,
            database_path: dir.path().join("expenses.db"),
            migrations_path: PathBuf::from("migrations"),
        };

        let (state, _router) = build_app(config).unwrap();
        let conn = state.db.get().unwrap();
        assert_eq!(categories::list_categories(&conn).unwrap().len(), 5);
        assert!(dir.path().join("expenses.db").exists());
    }
}
