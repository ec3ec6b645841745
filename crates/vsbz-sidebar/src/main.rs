mod config;
mod error;
mod export;
mod server;
mod update;

use std::path::Path;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use server::SidebarServer;
use update::ReloadService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for MCP JSON-RPC
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting vsbz-sidebar");

    let config = Config::from_env()?;
    info!(
        catalog_path = %config.catalog_path,
        sidebar_out = config.sidebar_out.as_deref().unwrap_or("-"),
        collapsed = config.collapsed,
        "configuration loaded"
    );

    let catalog = ReloadService::new(config.clone()).load()?;

    if let Some(out) = config.sidebar_out.as_deref() {
        let sections = vsbz_catalog::nav::build_sidebar(&catalog.entries, &config.layout());
        export::write_sidebar(Path::new(out), &sections)?;
        return Ok(());
    }

    let server = SidebarServer::new(catalog, config);

    if let Ok(addr) = std::env::var("MCP_TCP_LISTEN_ADDR") {
        let listener = TcpListener::bind(&addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.clone();
            tokio::spawn(async move {
                tracing::info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                tracing::info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
