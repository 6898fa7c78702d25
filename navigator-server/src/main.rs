use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use navigator_server::audit::AuditRecorder;
use navigator_server::config::NavigatorConfig;
use navigator_server::planner::RoutePlanner;
use navigator_server::service::RouteService;
use navigator_server::store::{InMemoryAuditStore, InMemoryStatsStore};
use navigator_server::strategy::StrategyRegistry;
use navigator_server::web::{AppState, create_router};

/// Waits for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = NavigatorConfig::from_env();

    // Two strategies claiming one mode is a startup bug, not a request error.
    let registry = StrategyRegistry::standard().expect("failed to build strategy registry");
    info!(modes = ?registry.modes(), "registered route strategies");

    let planner = RoutePlanner::new(
        Arc::new(registry),
        InMemoryStatsStore::new(),
        &config.planner,
    );
    let audit = AuditRecorder::new(InMemoryAuditStore::new());
    let state = AppState::new(RouteService::new(planner, audit), &config.greeting);

    let app = create_router(state);

    let addr = config.addr();
    info!(
        %addr,
        cache = config.planner.cache.is_some(),
        stats_policy = ?config.planner.stats_policy,
        "route navigator listening"
    );
    info!("  GET    /health              - Health check");
    info!("  GET    /api/v1/greeting     - Greeting message");
    info!("  POST   /api/v1/routes/plan  - Plan a route");
    info!("  DELETE /api/v1/routes/stats - Remove old route statistics");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}
