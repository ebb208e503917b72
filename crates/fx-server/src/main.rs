use anyhow::Context;
use fx_server::ambassador::AmbassadorStore;
use fx_server::serve::{router, AppState};
use fx_server::waitlist::WaitlistStore;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let site_root: PathBuf = std::env::args().nth(1).unwrap_or_else(|| "site".into()).into();
    let port: u16 = match std::env::var("PORT") {
        Ok(v) => v.parse().context("PORT is not a valid port number")?,
        Err(_) => 3000,
    };

    let state = AppState {
        site_root: site_root.clone(),
        waitlist: Arc::new(Mutex::new(WaitlistStore::new("data/waitlist.json"))),
        ambassador: Arc::new(Mutex::new(AmbassadorStore::new("data/ambassadors.json"))),
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;
    log::info!(
        "serving {} on http://localhost:{port}",
        site_root.display()
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for ctrl-c: {e}");
        return;
    }
    log::info!("shutting down");
}
