//! HTTP protocol implementation.
//!
//! This module implements a deliberately small HTTP/1.1 server: one read,
//! one response, then the connection closes.
//!
//! # Architecture
//!
//! - **`connection`**: Drives a single exchange on a client stream
//! - **`parser`**: Tolerant parser turning raw bytes into a request record
//! - **`request`**: The bounded request record and its display helpers
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Single read of the request bytes
//!        └──────┬──────┘
//!               │ Bytes received (EOF → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and build the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```
//! use pagehand::http::connection::respond;
//! use pagehand::router::Router;
//!
//! let bytes = respond(&Router::default(), b"GET /about HTTP/1.1\r\n\r\n");
//! assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
