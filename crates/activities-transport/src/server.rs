//! HTTP transport server using Axum.
//!
//! Builds the router over an `ActivityStore`, binds the listener, and
//! runs the server until `stop` is called.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use activities_protocol::ActivityStore;
use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::info;

use crate::routes::{health_handler, list_handler, signup_handler, unregister_handler};

/// Transport server configuration.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Port to listen on (0 for OS-assigned)
    pub port: u16,
    /// Hostname to bind to
    pub hostname: String,
    /// Enable permissive CORS
    pub enable_cors: bool,
    /// Front-end directory served under `/static`
    pub static_dir: Option<PathBuf>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            hostname: "127.0.0.1".into(),
            enable_cors: false,
            static_dir: None,
        }
    }
}

/// Shared state handed to every handler.
pub struct AppState<S: ActivityStore> {
    pub store: Arc<S>,
    pub started_at: DateTime<Utc>,
}

/// Build the application router without binding a socket.
pub fn router<S: ActivityStore>(store: Arc<S>, config: &TransportConfig) -> Router {
    let state = Arc::new(AppState {
        store,
        started_at: Utc::now(),
    });

    let mut app = Router::new()
        .route("/activities", get(list_handler::<S>))
        .route(
            "/activities/{activity_name}/signup",
            post(signup_handler::<S>).delete(unregister_handler::<S>),
        )
        .route("/health", get(health_handler::<S>));

    if let Some(dir) = &config.static_dir {
        app = app
            .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
            .nest_service("/static", ServeDir::new(dir));
    }

    if config.enable_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app.with_state(state)
}

/// The transport server. Owns the listener task.
pub struct TransportServer {
    /// Shutdown signal
    shutdown_tx: Option<mpsc::Sender<()>>,
    /// Server task handle
    handle: Option<tokio::task::JoinHandle<()>>,
    /// Actual bound address
    addr: SocketAddr,
}

impl TransportServer {
    /// Start serving `store` with the given configuration.
    pub async fn start<S: ActivityStore>(
        config: TransportConfig,
        store: S,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::start_shared(config, Arc::new(store)).await
    }

    /// Start with a store that is also held elsewhere (tests, admin tooling).
    pub async fn start_shared<S: ActivityStore>(
        config: TransportConfig,
        store: Arc<S>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);

        let app = router(store, &config);

        let listener = tokio::net::TcpListener::bind((config.hostname.as_str(), config.port)).await?;
        let addr = listener.local_addr()?;

        info!("Activities API listening on http://{addr}");
        if let Some(dir) = &config.static_dir {
            info!("Serving static files from {}", dir.display());
        }

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.recv().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
            addr,
        })
    }

    /// Get the actual bound port.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Gracefully stop the server.
    pub async fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(()).await;
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
        info!("Activities API stopped");
    }
}
