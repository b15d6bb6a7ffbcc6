//! pagehand - tiny single-shot HTTP/1.1 server
//!
//! Core library: tolerant request parsing, path routing and response framing.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
