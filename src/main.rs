use dotenv::dotenv;
use pizza_order::api::{self, AppState};
use pizza_order::client::DominosClient;
use pizza_order::config::Config;
use pizza_order::order::OrderRegistry;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Main entry point for the pizza order service.
///
/// This function:
/// 1. Loads environment variables from .env file
/// 2. Builds the platform client and an empty order registry
/// 3. Starts the HTTP server on the configured address
#[tokio::main]
async fn main() {
    // Load environment variables before the filter reads RUST_LOG
    dotenv().ok();

    FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false)
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .pretty()
        .init();

    info!("Starting pizza order service");
    let config = Config::from_env();

    let client = DominosClient::new(config.api_url.clone()).expect("Failed to build HTTP client");
    let state = AppState {
        registry: OrderRegistry::new(),
        client,
    };
    let app = api::create_router(state);

    let addr = config.addr().expect("Invalid address format");
    info!(api_url = %config.api_url, "Server listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server error");
}
