use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinSet;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::Router;

/// Pause after a failed accept so errors like EMFILE do not spin the loop.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(50);

/// Source of incoming client streams.
pub trait Accept {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send + 'static;

    fn accept(&self) -> impl Future<Output = io::Result<(Self::Stream, SocketAddr)>> + Send;
}

impl Accept for TcpListener {
    type Stream = TcpStream;

    fn accept(&self) -> impl Future<Output = io::Result<(TcpStream, SocketAddr)>> + Send {
        TcpListener::accept(self)
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.server.listen_addr))?;
    info!("Listening on {}", cfg.server.listen_addr);

    let router = Arc::new(Router::new(cfg.response_mode()));
    info!(mode = ?router.mode(), "Router ready");

    serve(
        listener,
        router,
        cfg.server.buffer_size,
        cfg.server.max_connections,
    )
    .await
}

/// Accepts connections until `max_connections` (if set) have been taken.
///
/// A failed accept is logged and retried; it never ends the loop. Once the
/// limit is reached, returns after every accepted connection is answered.
pub async fn serve<A>(
    listener: A,
    router: Arc<Router>,
    buffer_size: usize,
    max_connections: Option<usize>,
) -> anyhow::Result<()>
where
    A: Accept + Sync,
{
    let mut tasks = JoinSet::new();
    let mut accepted = 0usize;

    while max_connections.is_none_or(|max| accepted < max) {
        let (socket, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!("Accept failed: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        accepted += 1;
        info!("Accepted connection from {}", peer);

        let router = Arc::clone(&router);
        tasks.spawn(async move {
            let mut conn = Connection::new(socket, router, buffer_size);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
            info!("Connection closed: {}", peer);
        });

        // Reap finished connections so the set does not grow unbounded
        while tasks.try_join_next().is_some() {}
    }

    info!(accepted, "Connection limit reached");
    while tasks.join_next().await.is_some() {}

    Ok(())
}
