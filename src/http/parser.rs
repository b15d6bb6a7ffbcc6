use crate::http::request::{
    bounded, ParsedRequest, MAX_HOST_LEN, MAX_METHOD_LEN, MAX_PATH_LEN, MAX_REQUEST_LINE_LEN,
    MAX_USER_AGENT_LEN, MAX_VERSION_LEN,
};

const HOST_PREFIX: &str = "Host: ";
const USER_AGENT_PREFIX: &str = "User-Agent: ";

/// Parses the raw bytes of a single read into a [`ParsedRequest`].
///
/// Parsing never fails. Anything that cannot be recovered (missing request
/// line tokens, absent headers, an empty buffer) is left as an empty field,
/// and every field is truncated to its bound rather than rejected.
///
/// Only the request line, the first `Host: ` line and the first
/// `User-Agent: ` line are consulted. A NUL byte ends the logical request.
pub fn parse_http_request(buf: &[u8]) -> ParsedRequest {
    let logical = match buf.iter().position(|&b| b == 0) {
        Some(nul) => &buf[..nul],
        None => buf,
    };

    if logical.is_empty() {
        return ParsedRequest::default();
    }

    let text = String::from_utf8_lossy(logical);

    // Request line
    let line_end = text.find(['\r', '\n']).unwrap_or(text.len());
    let request_line = bounded(&text[..line_end], MAX_REQUEST_LINE_LEN);
    let mut parts = request_line.split(is_c_space).filter(|t| !t.is_empty());

    let method = parts.next().map(|m| bounded(m, MAX_METHOD_LEN)).unwrap_or_default();
    let path = parts.next().map(|p| bounded(p, MAX_PATH_LEN)).unwrap_or_default();
    let version = parts.next().map(|v| bounded(v, MAX_VERSION_LEN)).unwrap_or_default();

    // Headers
    let host = find_header_line(&text, HOST_PREFIX)
        .map(|h| bounded(h, MAX_HOST_LEN))
        .unwrap_or_default();
    let user_agent = find_header_line(&text, USER_AGENT_PREFIX)
        .map(|ua| bounded(ua, MAX_USER_AGENT_LEN))
        .unwrap_or_default();

    ParsedRequest {
        method,
        path,
        version,
        host,
        user_agent,
    }
}

/// Token separators: the C `isspace` set, which includes vertical tab.
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Value of the first line starting with `prefix`, up to CR/LF.
fn find_header_line<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.split(['\r', '\n'])
        .find_map(|line| line.strip_prefix(prefix))
}
