#![allow(dead_code)]

use std::sync::Arc;

use censur_api::config::{LogFormat, ServerConfig};
use censur_api::router::build_app_router;
use censur_api::state::AppState;
use censur_client::ApiClient;
use sqlx::PgPool;

/// Serve the real router on an ephemeral local port and return a client
/// pointed at it. The server task lives until the test's runtime ends.
pub async fn serve(pool: PgPool) -> ApiClient {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        database_max_connections: 5,
        log_format: LogFormat::Text,
    };
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config).unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ApiClient::new(format!("http://{addr}"))
}
