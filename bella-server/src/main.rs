use anyhow::Context;
use bella_server::{build_router, logging, ShutdownCoordinator, SiteConfig, VERSION};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--print-config") {
        print!("{}", SiteConfig::generate_sample());
        return Ok(());
    }

    let config = SiteConfig::load();
    let _log_guard = logging::init(&config.logging)?;
    config.validate().context("Invalid configuration")?;

    info!("Starting Bella Italia server v{}", VERSION);

    let index_path = config.site.index_path();
    if !index_path.is_file() {
        warn!(
            "App shell {} not found; run `trunk build` in bella-ui first",
            index_path.display()
        );
    }

    let app = build_router(&config);

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Serving {} on http://{}", config.site.dist_dir.display(), addr);

    let coordinator = ShutdownCoordinator::new();
    let signal_listener = coordinator.clone();
    tokio::spawn(async move { signal_listener.wait_for_signal().await });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { coordinator.wait().await })
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}
