use tracing::info;

use vet_core::config::Config;
use vet_core::tracing::init_tracing;
use vet_employees::config::EmployeesConfig;
use vet_employees::router::build_router;
use vet_employees::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = EmployeesConfig::from_env();

    let state = AppState::connect(&config)
        .await
        .expect("failed to initialise backends");

    let router = build_router(state, &config.api_prefix());
    let http_addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!(prefix = %config.api_prefix(), "employees service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
