//! Path routing
//!
//! Maps a request path to a canned page through a fixed, exact-match table
//! and turns the match into a framed [`Response`].

use std::borrow::Cow;

use crate::http::request::ParsedRequest;
use crate::http::response::{ContentType, Response, ResponseBuilder, StatusCode};
use crate::router::pages;

/// How the router answers requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResponseMode {
    /// Serve the HTML routing table
    #[default]
    Routed,
    /// Answer every request with the same plain-text body
    PlainText { body: String },
}

/// Outcome of routing a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    pub status: StatusCode,
    pub content_type: ContentType,
    pub body: Cow<'static, str>,
}

impl RouteResult {
    fn html(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            content_type: ContentType::Html,
            body: Cow::Borrowed(body),
        }
    }

    /// Formats this result as a complete response.
    pub fn into_response(self) -> Response {
        ResponseBuilder::new(self.status)
            .content_type(self.content_type)
            .body(self.body.into_owned())
            .build()
    }
}

/// Stateless request router.
///
/// Holds only its mode; it can be shared between connections without
/// synchronization.
#[derive(Debug, Clone, Default)]
pub struct Router {
    mode: ResponseMode,
}

impl Router {
    pub fn new(mode: ResponseMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> &ResponseMode {
        &self.mode
    }

    /// Resolves `path` against the routing table.
    ///
    /// Matching is exact and case-sensitive. Every path, including the empty
    /// one, resolves to exactly one result; unknown paths get the 404 page.
    pub fn route(&self, path: &str) -> RouteResult {
        match &self.mode {
            ResponseMode::PlainText { body } => RouteResult {
                status: StatusCode::Ok,
                content_type: ContentType::PlainText,
                body: Cow::Owned(body.clone()),
            },
            ResponseMode::Routed => match path {
                "/" | "/index.html" => RouteResult::html(StatusCode::Ok, pages::HOME_PAGE),
                "/about" => RouteResult::html(StatusCode::Ok, pages::ABOUT_PAGE),
                "/contact" => RouteResult::html(StatusCode::Ok, pages::CONTACT_PAGE),
                _ => RouteResult::html(StatusCode::NotFound, pages::NOT_FOUND_PAGE),
            },
        }
    }

    /// Routes a parsed request and formats the response.
    pub fn handle(&self, request: &ParsedRequest) -> Response {
        let result = self.route(&request.path);

        if result.status == StatusCode::NotFound {
            tracing::debug!(path = %request.path, "No route for path");
        }

        result.into_response()
    }
}
