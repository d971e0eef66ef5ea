use crate::http::headers::Headers;
use crate::http::request::{Method, Request, Version};

/// Maximum size of a request head (request line + headers) in bytes.
const MAX_HEAD_SIZE: usize = 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The terminating blank line has not arrived yet; read more bytes.
    #[error("incomplete request head")]
    Incomplete,
    #[error("request head exceeds 64 KiB")]
    HeadTooLarge,
    #[error("request head is not valid UTF-8")]
    InvalidEncoding,
    #[error("unreadable request line: '{0}'")]
    InvalidRequestLine(String),
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
    #[error("unsupported HTTP version: {0}")]
    UnsupportedVersion(String),
    #[error("unreadable header line: '{0}'")]
    InvalidHeader(String),
    #[error("connection closed before a complete request was received")]
    UnexpectedEof,
}

/// Parses a request head from the accumulated byte buffer.
///
/// Input framing is tolerant: lines end with `\r\n` or bare `\n`, and any
/// number of blank lines before the request line are skipped. Returns
/// `ParseError::Incomplete` until the blank line terminating the header block
/// has been buffered; every other error is fatal for the connection.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let lines = match head_lines(buf)? {
        Some(lines) => lines,
        None => {
            // The cap only applies to the head itself; surplus bytes after a
            // complete head (an eagerly-sent body) are not counted.
            if buf.len() > MAX_HEAD_SIZE {
                return Err(ParseError::HeadTooLarge);
            }
            return Err(ParseError::Incomplete);
        }
    };

    let (method, uri, version) = parse_request_line(lines[0])?;

    let mut headers = Headers::new();
    for line in &lines[1..] {
        let (name, value) = parse_header_line(line)?;
        headers.insert(name, value);
    }

    Ok(Request {
        method,
        uri: uri.to_string(),
        version,
        headers,
    })
}

/// Collects the head's lines: the request line followed by header lines,
/// leading blank lines dropped. `None` means the terminating blank line has
/// not been received yet.
fn head_lines(buf: &[u8]) -> Result<Option<Vec<&str>>, ParseError> {
    let mut lines = Vec::new();
    let mut start = 0;

    while let Some(offset) = buf[start..].iter().position(|&b| b == b'\n') {
        let mut line = &buf[start..start + offset];
        start += offset + 1;

        if line.last() == Some(&b'\r') {
            line = &line[..line.len() - 1];
        }

        if line.is_empty() {
            if lines.is_empty() {
                // Tolerant framing: blank lines before the request line
                continue;
            }
            return Ok(Some(lines));
        }

        let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidEncoding)?;
        lines.push(line);
    }

    Ok(None)
}

fn parse_request_line(line: &str) -> Result<(Method, &str, Version), ParseError> {
    // Split on single spaces: consecutive spaces produce empty tokens and
    // fail the count check.
    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() != 3 {
        return Err(ParseError::InvalidRequestLine(line.to_string()));
    }

    let method = Method::from_str(tokens[0])
        .ok_or_else(|| ParseError::UnsupportedMethod(tokens[0].to_string()))?;
    let version = Version::from_str(tokens[2])
        .ok_or_else(|| ParseError::UnsupportedVersion(tokens[2].to_string()))?;

    Ok((method, tokens[1], version))
}

fn parse_header_line(line: &str) -> Result<(&str, &str), ParseError> {
    let colon = line
        .find(':')
        .filter(|&i| i >= 1)
        .ok_or_else(|| ParseError::InvalidHeader(line.to_string()))?;

    // Strict shape: the value starts two bytes past the colon, skipping
    // exactly one separator byte.
    let value = line
        .get(colon + 2..)
        .ok_or_else(|| ParseError::InvalidHeader(line.to_string()))?;

    Ok((&line[..colon], value))
}
