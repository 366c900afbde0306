pub mod config;
pub mod logging;
pub mod routes;

use anyhow::{Context, Result};
use std::{future::Future, net::SocketAddr};
use tracing::info;

/// Binds `addr` and serves until `shutdown` resolves.
pub async fn serve(
    calculator: routes::SharedCalculator,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let (addr, server) = warp::serve(routes::calculate(calculator))
        .try_bind_with_graceful_shutdown(addr, shutdown)
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "listening");
    server.await;
    info!("server stopped");
    Ok(())
}
