use anyhow::Context;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, Response};

/// Serializes the response head: status line, headers in insertion order,
/// terminating blank line. Pure function of the response, so repeated calls
/// yield identical bytes.
pub fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        resp.version.as_str(),
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (name, value) in resp.headers.iter() {
        buf.extend_from_slice(name.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(value.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes the full response to the stream: head, then body, then a flush.
///
/// A file body is opened here, which doubles as the existence re-check for
/// the path the static handler resolved. File contents are treated as UTF-8
/// text and streamed in chunks.
pub async fn write_response<S>(stream: &mut S, resp: &Response) -> anyhow::Result<()>
where
    S: AsyncWrite + Unpin,
{
    stream.write_all(&serialize_head(resp)).await?;

    match &resp.body {
        Body::Empty => {}
        Body::Text(text) => {
            stream.write_all(text.as_bytes()).await?;
        }
        Body::File(path) => {
            let mut file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open body file {}", path.display()))?;
            tokio::io::copy(&mut file, stream).await?;
        }
    }

    stream.flush().await?;
    Ok(())
}
