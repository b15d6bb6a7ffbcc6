/// HTTP status codes the server produces.
///
/// - `Ok` (200): a route matched, or plain-text mode
/// - `NotFound` (404): no route for the requested path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use pagehand::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use pagehand::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Media types of the bodies the server sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Html,
    PlainText,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Html => "text/html",
            ContentType::PlainText => "text/plain",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Headers keep their insertion order so the same response always
/// serializes to the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Headers in the order they are written
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use pagehand::http::response::{ContentType, ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type(ContentType::PlainText)
///     .body(b"hi".to_vec())
///     .build();
///
/// assert_eq!(response.header("Content-Length"), Some("2"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: ContentType,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    ///
    /// The content type defaults to `text/html`.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: ContentType::Html,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Adds an extra header after the framing headers.
    ///
    /// `Content-Type`, `Content-Length` and `Connection` are owned by the
    /// builder; values passed here for those names are dropped.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        if !is_framing_header(&key) {
            self.headers.push((key, value.into()));
        }
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response.
    ///
    /// Emits `Content-Type`, `Content-Length` (always the exact body length)
    /// and `Connection: close`, followed by any extra headers.
    pub fn build(self) -> Response {
        let mut headers = vec![
            ("Content-Type".to_string(), self.content_type.as_str().to_string()),
            ("Content-Length".to_string(), self.body.len().to_string()),
            ("Connection".to_string(), "close".to_string()),
        ];
        headers.extend(self.headers);

        Response {
            status: self.status,
            headers,
            body: self.body,
        }
    }
}

fn is_framing_header(key: &str) -> bool {
    ["Content-Type", "Content-Length", "Connection"]
        .iter()
        .any(|h| h.eq_ignore_ascii_case(key))
}

impl Response {
    /// Creates a 200 OK response with the given body and content type.
    pub fn ok(content_type: ContentType, body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(content_type)
            .body(body)
            .build()
    }

    /// Creates a 200 OK `text/plain` response.
    pub fn text(body: impl Into<Vec<u8>>) -> Self {
        Self::ok(ContentType::PlainText, body)
    }

    /// Retrieves a header value by name (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
