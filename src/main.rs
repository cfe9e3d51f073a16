use clap::Parser;
use mcp_tools::{Config, Server, SystemClock, ToolRegistry, tools};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(version, about = "MCP server exposing the Hello, get_alerts and get_frontmatter tools")]
struct Args {
    /// Server name reported to clients
    #[arg(long)]
    name: Option<String>,

    /// Log filter, e.g. `info` or `mcp_tools=debug`. Overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries the protocol, so logs go to stderr
    let filter = match &args.log {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::default();
    if let Some(name) = args.name {
        config = config.with_name(name);
    }
    tracing::info!(?config, "starting mcp-tools");

    let mut registry = ToolRegistry::new();
    tools::register_all(&mut registry, Arc::new(SystemClock))?;

    let service = Server::new(config, registry)
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!("serving error: {e:?}"))?;
    service.waiting().await?;
    Ok(())
}
