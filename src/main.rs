use std::sync::Arc;
use tokio::net::TcpListener;

mod api;
mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // Both bind failure and a missing asset directory are fatal before the
    // accept loop starts.
    let asset_dir = cfg.resolve_asset_dir()?;
    let listener = server::bind_listener(addr)?;

    logger::log_server_start(&addr, &asset_dir);

    let state = Arc::new(config::AppState::new(cfg, asset_dir));
    run_accept_loop(listener, state).await
}

/// Accept connections until the process is terminated.
///
/// A failed accept is logged and the loop continues; per-connection errors
/// are isolated inside the spawned connection tasks.
async fn run_accept_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                server::handle_connection(stream, peer_addr, Arc::clone(&state));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
