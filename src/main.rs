use ast_checker::config::{Config, redact_url};
use ast_checker::db::Database;
use ast_checker::{AppState, app_router};
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Missing secrets end the process here.
    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.basic.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let database_url = cfg.database.connection_url(&cfg.secrets)?;
    info!(
        database_url = %redact_url(&database_url),
        listen_addr = %cfg.basic.listen_addr,
        loglevel = %cfg.basic.loglevel,
        academic_years = cfg.form.academic_years.len(),
        staff = cfg.form.staff_initials.len()
    );

    if cfg.basic.cookie_key.is_none() {
        warn!("no basic.cookie_key configured; sessions will not survive a restart");
    }
    if cfg.basic.insecure_cookie {
        warn!("session cookie is sent without the Secure attribute");
    }

    let db = Database::connect(&database_url, cfg.database.max_connections).await?;
    db.migrate().await?;
    info!("AST check table provisioned");

    let state = AppState::from_config(db, &cfg)?;
    let app = app_router(state);

    let listener = TcpListener::bind(cfg.basic.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.basic.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
