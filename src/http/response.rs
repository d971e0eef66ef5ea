use crate::http::headers::Headers;
use crate::http::request::Version;
use std::path::PathBuf;

/// HTTP status codes emitted by the server.
///
/// - `Ok` (200): Request successful
/// - `BadRequest` (400): Required header missing
/// - `NotFound` (404): Static resolution miss
/// - `InternalServerError` (500): Parse or handler failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl Status {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use wicket::http::response::Status;
    /// assert_eq!(Status::Ok.as_u16(), 200);
    /// assert_eq!(Status::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::NotFound => "Not Found",
            Status::InternalServerError => "Internal Server Error",
        }
    }
}

/// Response payload.
///
/// A file body is streamed at write time; the handler that sets it is
/// responsible for the file existing, and the writer re-checks by opening it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// No payload; nothing is written after the header block
    Empty,
    /// In-memory text payload, written verbatim
    Text(String),
    /// A file on disk whose contents are streamed to the client
    File(PathBuf),
}

/// Represents an HTTP response under construction by the handler chain.
///
/// Created with default status 200 before the chain runs; each handler may
/// reassign status, headers, and body. Serialized exactly once per
/// connection.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: Status,
    /// Version mirrored from the request
    pub version: Version,
    /// Response headers, written in insertion order
    pub headers: Headers,
    /// Response payload
    pub body: Body,
}

impl Response {
    /// Creates a response defaulted to 200 OK with no headers and no body.
    pub fn new(version: Version) -> Self {
        Self {
            status: Status::Ok,
            version,
            headers: Headers::new(),
            body: Body::Empty,
        }
    }

    /// Creates the 500 response the worker falls back to when parsing or
    /// chain execution fails. The failure's rendering becomes the body.
    pub fn server_error(version: Version, detail: impl Into<String>) -> Self {
        Self {
            status: Status::InternalServerError,
            version,
            headers: Headers::new(),
            body: Body::Text(detail.into()),
        }
    }
}
