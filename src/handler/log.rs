use crate::handler::Handler;
use crate::http::request::Request;
use crate::http::response::Response;

/// Emits one structured log line per request with the final status.
///
/// Placement in the chain is a deployment decision: placed last it observes
/// the status the other handlers settled on, placed earlier it logs whatever
/// the response holds at that point.
pub struct LogHandler;

impl Handler for LogHandler {
    fn handle(&self, req: &mut Request, res: &mut Response) -> anyhow::Result<bool> {
        tracing::info!(
            method = %req.method,
            uri = %req.uri,
            version = %req.version,
            status = res.status.as_u16(),
            "request handled"
        );
        Ok(true)
    }
}
