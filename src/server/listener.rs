use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!(
        "Listening on {}, serving {}",
        cfg.server.listen_addr,
        cfg.static_files.root.display()
    );

    serve(listener, cfg).await
}

/// Accepts connections forever, one task per connection. Failures stay
/// inside the task that hit them.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!("Failed to accept connection: {}", e);
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let conn = Connection::new(socket, &cfg.server, &cfg.static_files);
        tokio::spawn(async move {
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
            tracing::debug!("Done handling connection from {}", peer);
        });
    }
}
