//! Web server for Board API.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::board::BoardStore;
use crate::config::{Config, WebConfig};
use crate::{BoardError, Result};

use super::handlers::AppState;
use super::router::create_app;

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Web configuration.
    web_config: WebConfig,
}

impl WebServer {
    /// Create a new web server over the given store.
    pub fn new(config: &Config, store: Arc<dyn BoardStore>) -> Result<Self> {
        let addr = config.bind_address().parse().map_err(|e| {
            BoardError::Config(format!(
                "invalid server address {}: {}",
                config.bind_address(),
                e
            ))
        })?;

        Ok(Self {
            addr,
            app_state: Arc::new(AppState::new(store)),
            web_config: config.web.clone(),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the web server until Ctrl-C is received.
    pub async fn run(self) -> Result<()> {
        let router = create_app(self.app_state, &self.web_config);

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);
        if self.web_config.swagger_enabled {
            tracing::info!("Swagger docs available at http://{}/swagger", local_addr);
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Web server stopped");
        Ok(())
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> Result<SocketAddr> {
        let router = create_app(self.app_state, &self.web_config);

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
