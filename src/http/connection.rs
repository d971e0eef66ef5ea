use bytes::BytesMut;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::handler::{Handler, run_chain};
use crate::http::parser::{ParseError, parse_request};
use crate::http::request::{Request, Version};
use crate::http::response::Response;
use crate::http::writer::write_response;

/// Version used for error responses produced before a request version was
/// negotiated.
const FALLBACK_VERSION: Version = Version::Http11;

/// Owns one accepted connection end-to-end: reads and parses the request,
/// drives the handler chain, serializes the response, closes the stream.
///
/// Generic over the stream so tests can drive it with an in-memory duplex
/// pipe instead of a TCP socket.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    handlers: Arc<Vec<Box<dyn Handler>>>,
    state: ConnectionState,
}

enum ConnectionState {
    Reading,
    Running(Request),
    Writing(Response),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, handlers: Arc<Vec<Box<dyn Handler>>>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            handlers,
            state: ConnectionState::Reading,
        }
    }

    /// Runs the connection to completion.
    ///
    /// Every failure before the write phase is mapped to a 500 response, so
    /// the worker always attempts to write something before closing. A write
    /// failure is logged and swallowed; the client sees a truncated or
    /// absent response.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => match self.read_request().await {
                    Ok(req) => {
                        self.state = ConnectionState::Running(req);
                    }
                    Err(e) => {
                        tracing::error!("Failed to read a request: {e:#}");
                        self.state = ConnectionState::Writing(Response::server_error(
                            FALLBACK_VERSION,
                            format!("{e:#}"),
                        ));
                    }
                },

                ConnectionState::Running(mut req) => {
                    let mut res = Response::new(req.version);

                    if let Err(e) = run_chain(&self.handlers, &mut req, &mut res) {
                        tracing::error!("Handler chain failed: {e:#}");
                        res = Response::server_error(req.version, format!("{e:#}"));
                    }

                    self.state = ConnectionState::Writing(res);
                }

                ConnectionState::Writing(res) => {
                    if let Err(e) = write_response(&mut self.stream, &res).await {
                        tracing::error!("Failed to write response: {e:#}");
                    }
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<Request> {
        loop {
            // Try parsing whatever we already have
            match parse_request(&self.buffer) {
                Ok(request) => return Ok(request),
                Err(ParseError::Incomplete) => {
                    // Need more data, fall through to read
                }
                Err(e) => return Err(e.into()),
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;
            if n == 0 {
                return Err(ParseError::UnexpectedEof.into());
            }
        }
    }
}
