//! Serve command implementation

use anyhow::{Context, Result};
use tracing::info;

use snipforge::config::Config;
use snipforge::platform::PlatformFamily;
use snipforge::server::{ServerState, SnippetServer};

/// Run the HTTP endpoint until the process is stopped
pub async fn serve_command(config: Config, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(config.server.port);
    let state = ServerState {
        config,
        family: PlatformFamily::current(),
        runtime: tokio::runtime::Handle::current(),
    };

    let server = SnippetServer::bind(state, port)?;
    info!("[snipforge:serve] POST snippets to http://127.0.0.1:{}/snippets", port);

    tokio::task::spawn_blocking(move || server.run())
        .await
        .context("HTTP server thread panicked")?;

    Ok(())
}
