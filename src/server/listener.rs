use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::config::Config;
use crate::handler::{Handler, HostHandler, LogHandler, StaticFilesHandler};
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    // Host check first, logging last so it sees the final status.
    let handlers: Arc<Vec<Box<dyn Handler>>> = Arc::new(vec![
        Box::new(HostHandler),
        Box::new(StaticFilesHandler::new(cfg.static_files.clone())),
        Box::new(LogHandler),
    ]);

    // Bounded worker pool: accepted connections beyond the limit wait here,
    // which is the server's only backpressure mechanism.
    let pool = Arc::new(Semaphore::new(cfg.server.max_connections));

    loop {
        let permit = pool.clone().acquire_owned().await?;
        let (socket, peer) = listener.accept().await?;
        debug!("Accepted connection from {}", peer);

        let handlers = handlers.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, handlers);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
            drop(permit);
        });
    }
}
