use std::sync::Arc;

use listing_shell::app::AppServices;
use listing_shell::catalog::StaticCatalog;
use listing_shell::config::AppConfig;
use listing_shell::error::Result;
use listing_shell::session::PlaceholderAuthProvider;
use listing_shell::store::LibSqlStore;
use listing_shell::wizard::NoopPublisher;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with_target(false)
        .init();

    eprintln!("🏠 Listing Shell v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Database: {}", config.db_path.display());
    eprintln!("   API: http://0.0.0.0:{}/api", config.port);

    // ── Key-value store ─────────────────────────────────────────────────
    let kv = Arc::new(LibSqlStore::new_local(&config.db_path).await?);

    // ── Services ────────────────────────────────────────────────────────
    let services = AppServices::start(
        kv,
        Arc::new(PlaceholderAuthProvider),
        Arc::new(NoopPublisher),
        Arc::new(StaticCatalog::demo()),
    )
    .await;

    let snapshot = services.session.snapshot().await;
    eprintln!(
        "   Session: {} ({} favorites)",
        if snapshot.authenticated {
            "signed in"
        } else {
            "signed out"
        },
        snapshot.favorite_ids.len()
    );

    // ── HTTP ────────────────────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "API server started");
    axum::serve(listener, services.router())
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    tracing::info!("Shut down");
    Ok(())
}
