//! Request handlers
//!
//! This module defines the handler abstraction the server is extended
//! through, plus the shipped implementations: Host-header validation, static
//! file serving, and request logging.

pub mod host;
pub mod log;
pub mod static_files;

pub use host::HostHandler;
pub use log::LogHandler;
pub use static_files::StaticFilesHandler;

use crate::http::request::Request;
use crate::http::response::Response;

/// A unit of request processing, composed into an ordered chain.
///
/// Handlers are stateless per invocation; any configuration (e.g. a document
/// root) is captured at construction and never mutated afterwards, which is
/// what lets one chain be shared across all connection workers.
pub trait Handler: Send + Sync {
    /// Processes a request.
    ///
    /// Returns `Ok(true)` to continue with the next handler, `Ok(false)` to
    /// stop the chain with the current response as final. An `Err` aborts the
    /// chain and the worker maps it to a 500 response.
    fn handle(&self, req: &mut Request, res: &mut Response) -> anyhow::Result<bool>;
}

/// Runs handlers in order until one returns `Ok(false)` or fails.
pub fn run_chain(
    handlers: &[Box<dyn Handler>],
    req: &mut Request,
    res: &mut Response,
) -> anyhow::Result<()> {
    for handler in handlers {
        if !handler.handle(req, res)? {
            break;
        }
    }
    Ok(())
}
