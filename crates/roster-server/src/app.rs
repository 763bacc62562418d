//! Application assembly.

use crate::di::{build_module, RosterModule};
use axum::Router;
use roster_config::AppConfig;
use roster_core::{RosterError, RosterResult};
use roster_rest::create_router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// A configured server: DI module plus the router built on it.
pub struct Application {
    config: AppConfig,
    module: Arc<RosterModule>,
}

impl Application {
    /// Creates an application with a fresh, empty user store.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            module: build_module(),
        }
    }

    /// Returns the configuration the application was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Builds the HTTP router.
    pub fn router(&self) -> Router {
        create_router(self.module.as_ref(), &self.config)
    }

    /// Binds the configured address.
    pub async fn bind(&self) -> RosterResult<TcpListener> {
        let addr = self.config.server.addr();
        TcpListener::bind(&addr)
            .await
            .map_err(|e| RosterError::Internal(format!("Failed to bind {}: {}", addr, e)))
    }

    /// Serves requests on `listener` until `shutdown` completes.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> RosterResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.router();
        if let Ok(addr) = listener.local_addr() {
            info!("Starting REST server on http://{}", addr);
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| RosterError::Internal(format!("REST server error: {}", e)))?;

        info!("Server shutdown complete");
        Ok(())
    }
}
