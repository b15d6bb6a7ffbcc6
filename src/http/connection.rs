use std::sync::Arc;

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::parser::parse_http_request;
use crate::http::request::ParsedRequest;
use crate::http::writer::{serialize_response, ResponseWriter};
use crate::router::Router;

/// Runs the whole pipeline on one raw buffer: parse, route, serialize.
pub fn respond(router: &Router, raw: &[u8]) -> Bytes {
    let request = parse_http_request(raw);
    serialize_response(&router.handle(&request))
}

/// A single request/response exchange on one client stream.
///
/// The request is taken from exactly one read; the connection is closed
/// after the response is written.
pub struct Connection<S> {
    stream: S,
    router: Arc<Router>,
    buffer_size: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(ParsedRequest),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>, buffer_size: usize) -> Self {
        Self {
            stream,
            router,
            buffer_size,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    Some(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    None => {
                        tracing::debug!("Peer closed before sending a request");
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    tracing::info!(
                        method = %req.method,
                        path = %req.path,
                        version = %req.version,
                        host = %req.host,
                        user_agent = %req.user_agent_display(),
                        "Request received"
                    );
                    tracing::info!("\n{}", req);

                    let response = self.router.handle(req);
                    tracing::info!(status = response.status.as_u16(), "Response ready");

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    tracing::debug!("Response sent");
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    self.stream.shutdown().await.ok();
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads once and parses whatever arrived.
    ///
    /// Returns `None` when the peer closed without sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<ParsedRequest>> {
        // One byte stays in reserve, matching a NUL-terminated read buffer
        let mut buf = vec![0u8; self.buffer_size.saturating_sub(1).max(1)];
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            return Ok(None);
        }

        let raw = &buf[..n];
        tracing::debug!(bytes = n, raw = %String::from_utf8_lossy(raw), "Raw request");

        Ok(Some(parse_http_request(raw)))
    }
}
