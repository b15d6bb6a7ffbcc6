use std::collections::VecDeque;
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use pagehand::http::connection::{respond, Connection};
use pagehand::router::pages::{ABOUT_PAGE, CONTACT_PAGE, HOME_PAGE};
use pagehand::router::{ResponseMode, Router};
use pagehand::server::listener::{serve, Accept};
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};
use tokio::net::{TcpListener, TcpStream};

async fn exchange(router: Router, request: &[u8]) -> Vec<u8> {
    let (mut client, server) = tokio::io::duplex(4096);

    let handle = tokio::spawn(async move {
        let mut conn = Connection::new(server, Arc::new(router), 1024);
        conn.run().await
    });

    client.write_all(request).await.unwrap();

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    handle.await.unwrap().unwrap();
    out
}

#[tokio::test]
async fn test_connection_serves_routed_page() {
    let out = exchange(Router::default(), b"GET /about HTTP/1.1\r\nHost: test\r\n\r\n").await;
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("Connection: close\r\n"));
    assert!(text.ends_with(ABOUT_PAGE));
}

#[tokio::test]
async fn test_connection_matches_pure_pipeline() {
    let raw = b"GET /missing HTTP/1.1\r\n\r\n";
    let out = exchange(Router::default(), raw).await;

    assert_eq!(out, respond(&Router::default(), raw).to_vec());
}

#[tokio::test]
async fn test_connection_plain_text_mode() {
    let router = Router::new(ResponseMode::PlainText {
        body: "Hello, HTTP!".to_string(),
    });
    let out = exchange(router, b"GET / HTTP/1.1\r\n\r\n").await;
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Content-Type: text/plain\r\n"));
    assert!(text.contains("Content-Length: 12\r\n"));
    assert!(text.ends_with("\r\n\r\nHello, HTTP!"));
}

#[tokio::test]
async fn test_connection_closed_without_request() {
    let (client, server) = tokio::io::duplex(64);
    drop(client);

    let mut conn = Connection::new(server, Arc::new(Router::default()), 1024);
    assert!(conn.run().await.is_ok());
}

#[tokio::test]
async fn test_read_request_respects_buffer_size() {
    let (mut client, server) = tokio::io::duplex(4096);
    let mut conn = Connection::new(server, Arc::new(Router::default()), 8);

    client.write_all(b"GET /about HTTP/1.1\r\n\r\n").await.unwrap();
    let parsed = conn.read_request().await.unwrap().unwrap();

    // Only 7 bytes fit: "GET /ab"
    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.path, "/ab");
    assert_eq!(parsed.version, "");
}

#[tokio::test]
async fn test_serve_over_tcp_with_connection_limit() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(serve(
        listener,
        Arc::new(Router::default()),
        1024,
        Some(1),
    ));

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(b"GET / HTTP/1.1\r\nHost: test\r\n\r\n").await.unwrap();

    let mut out = Vec::new();
    stream.read_to_end(&mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.ends_with(HOME_PAGE));

    // One-shot server returns after its single connection
    server.await.unwrap().unwrap();
}

struct FlakyAcceptor {
    queue: Mutex<VecDeque<io::Result<(DuplexStream, SocketAddr)>>>,
}

impl Accept for FlakyAcceptor {
    type Stream = DuplexStream;

    fn accept(&self) -> impl Future<Output = io::Result<(DuplexStream, SocketAddr)>> + Send {
        let next = self.queue.lock().unwrap().pop_front();
        async move {
            match next {
                Some(result) => result,
                None => std::future::pending().await,
            }
        }
    }
}

#[tokio::test]
async fn test_serve_survives_failed_accepts() {
    let peer: SocketAddr = "127.0.0.1:4000".parse().unwrap();
    let (mut client, server_side) = tokio::io::duplex(4096);

    let acceptor = FlakyAcceptor {
        queue: Mutex::new(VecDeque::from(vec![
            Err(io::Error::from(io::ErrorKind::ConnectionAborted)),
            Err(io::Error::other("too many open files")),
            Ok((server_side, peer)),
        ])),
    };

    client.write_all(b"GET /contact HTTP/1.1\r\n\r\n").await.unwrap();

    serve(acceptor, Arc::new(Router::default()), 1024, Some(1))
        .await
        .unwrap();

    let mut out = Vec::new();
    client.read_to_end(&mut out).await.unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.ends_with(CONTACT_PAGE));
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_connection_logs_request_details_block() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    tracing::subscriber::with_default(subscriber, || {
        runtime.block_on(exchange(
            Router::default(),
            b"GET /about HTTP/1.1\r\nHost: logged.example\r\nUser-Agent: Foo/1.0\r\n\r\n",
        ));
    });

    let logged = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    assert!(logged.contains("----- HTTP Request Details -----"));
    assert!(logged.contains("Path:       /about"));
    assert!(logged.contains("Host:       logged.example"));
    assert!(logged.contains("User-Agent: Foo/1.0..."));
}
