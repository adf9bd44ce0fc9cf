use anyhow::Context;
use clap::Parser;
use geonear_server::{AppState, Handler, ServerArgs, parse_listen_addr, run_server};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geonear_server=info,geonear=info,info".into()),
        )
        .init();

    let args = ServerArgs::parse();

    let engine = args
        .engine_builder()?
        .build()
        .with_context(|| format!("loading {}", args.filename.display()))?;

    info!(
        "Read {} features ({} indexed.) All ready.",
        engine.record_count(),
        engine.indexed_count()
    );

    let state = AppState::new(Handler::new(Arc::new(engine)), args.pretty);

    let addr = parse_listen_addr(&args.listen)
        .with_context(|| format!("invalid listen address {:?}", args.listen))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl_c signal: {}", e);
        }
    };

    run_server(listener, state, shutdown).await
}
