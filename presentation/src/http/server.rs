//! Serving the router until shutdown is requested

use axum::Router;
use std::io;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serve `router` on `listener` until `shutdown` is cancelled.
///
/// In-flight requests are allowed to finish.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
) -> io::Result<()> {
    let addr = listener.local_addr()?;
    info!("Quiz API listening on http://{}", addr);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move { shutdown.cancelled().await })
    .await?;

    info!("Quiz API stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[tokio::test]
    async fn stops_when_cancelled() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let router = Router::new().route("/health", get(|| async { "ok" }));
        let shutdown = CancellationToken::new();

        let handle = tokio::spawn(serve(listener, router, shutdown.clone()));
        shutdown.cancel();

        handle.await.unwrap().unwrap();
    }
}
