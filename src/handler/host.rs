use crate::handler::Handler;
use crate::http::request::{Request, Version};
use crate::http::response::{Response, Status};

/// Rejects HTTP/1.1 requests that lack a `Host` header.
///
/// HTTP/1.0 predates the Host requirement, so those requests pass untouched.
/// On a missing header the response becomes 400 and the chain stops, so this
/// handler belongs at the front of the chain.
pub struct HostHandler;

impl Handler for HostHandler {
    fn handle(&self, req: &mut Request, res: &mut Response) -> anyhow::Result<bool> {
        if req.version == Version::Http10 {
            return Ok(true);
        }

        if req.header("Host").is_none() {
            res.status = Status::BadRequest;
            return Ok(false);
        }

        // TODO: check the host value against the configured server name
        Ok(true)
    }
}
