//! Listener setup and the serve loop.

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::{Result, ServerError};

/// Claims `addr` for listening.
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serves `app` on an already bound listener until the process is killed.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    if let Ok(local_addr) = listener.local_addr() {
        tracing::info!(%local_addr, "health server listening");
    }
    axum::serve(listener, app).await?;
    Ok(())
}

/// Binds the configured address and serves the health endpoint.
pub async fn run(config: &Config) -> Result<()> {
    let addr = config.addr();
    tracing::info!(%addr, "starting health server");

    let listener = bind(&addr).await?;
    serve(listener, crate::create_app()).await
}

/// Serves the health endpoint on all interfaces at `port`.
///
/// Only returns on failure; a bind error means the port is taken or not
/// permitted.
pub async fn start(port: u16) -> Result<()> {
    run(&Config::with_port(port)).await
}
