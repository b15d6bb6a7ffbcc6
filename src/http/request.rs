use std::fmt;

/// Maximum byte length kept for the request method.
pub const MAX_METHOD_LEN: usize = 7;
/// Maximum byte length kept for the request path.
pub const MAX_PATH_LEN: usize = 255;
/// Maximum byte length kept for the HTTP version token.
pub const MAX_VERSION_LEN: usize = 15;
/// Maximum byte length kept for the `Host` header value.
pub const MAX_HOST_LEN: usize = 255;
/// Maximum byte length kept for the `User-Agent` header value.
pub const MAX_USER_AGENT_LEN: usize = 511;
/// Maximum byte length of the request line considered for tokenizing.
pub const MAX_REQUEST_LINE_LEN: usize = 255;

/// Number of user agent characters shown in diagnostics.
const USER_AGENT_DISPLAY_CHARS: usize = 100;

/// A request as recovered from a single raw read.
///
/// Every field is bounded (see the `MAX_*` constants) and defaults to an
/// empty string when the input did not carry it. An empty field means
/// "not present", never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRequest {
    /// Request method token (e.g. "GET"), at most 7 bytes
    pub method: String,
    /// Request path (e.g. "/about"), at most 255 bytes
    pub path: String,
    /// HTTP version (e.g. "HTTP/1.1"), at most 15 bytes
    pub version: String,
    /// Value of the first `Host: ` line, at most 255 bytes
    pub host: String,
    /// Value of the first `User-Agent: ` line, at most 511 bytes
    pub user_agent: String,
}

impl ParsedRequest {
    /// Returns `true` when nothing at all was recovered from the input.
    pub fn is_empty(&self) -> bool {
        self.method.is_empty()
            && self.path.is_empty()
            && self.version.is_empty()
            && self.host.is_empty()
            && self.user_agent.is_empty()
    }

    /// Shortened user agent for log output.
    ///
    /// Keeps the first 100 characters and appends `...`. Routing never looks
    /// at this value.
    pub fn user_agent_display(&self) -> String {
        let shown: String = self
            .user_agent
            .chars()
            .take(USER_AGENT_DISPLAY_CHARS)
            .collect();
        format!("{}...", shown)
    }
}

impl fmt::Display for ParsedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----- HTTP Request Details -----")?;
        writeln!(f, "Method:     {}", self.method)?;
        writeln!(f, "Path:       {}", self.path)?;
        writeln!(f, "Version:    {}", self.version)?;
        writeln!(f, "Host:       {}", self.host)?;
        writeln!(f, "User-Agent: {}", self.user_agent_display())?;
        write!(f, "-------------------------------")
    }
}

/// Copies at most `max` bytes of `s`, backing off to a char boundary.
pub(crate) fn bounded(s: &str, max: usize) -> String {
    let mut end = s.len().min(max);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}
