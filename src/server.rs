use crate::app;
use crate::config::Config;
use crate::error::ServerError;
use crate::routes;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Bind the listener and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: &Config) -> Result<(), ServerError> {
    let listener = bind(config.socket_addr()).await?;
    run(listener, shutdown_signal()).await
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve the route table on `listener` until `shutdown` resolves
///
/// Each connection runs on its own task. Once `shutdown` completes the
/// listener stops accepting and in-flight requests are drained before
/// this returns.
pub async fn run<F>(listener: TcpListener, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    tracing::info!("Listening on http://{}", local_addr);
    for path in routes::ALL {
        tracing::debug!("  GET {}", path);
    }

    axum::serve(listener, app::router())
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to register SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
