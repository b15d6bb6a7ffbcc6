//! Request routing
//!
//! This module maps parsed requests to canned pages and builds the
//! responses sent back to clients.

pub mod pages;
pub mod table;

pub use table::{ResponseMode, RouteResult, Router};
