use std::net::SocketAddr;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use afficheur_server::storage::JsonStore;
use afficheur_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Data directory: first CLI argument, else AFFICHEUR_DATA_DIR, else ./data
    let data_dir: PathBuf = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("AFFICHEUR_DATA_DIR").ok())
        .unwrap_or_else(|| "data".to_string())
        .into();

    println!("Loading schedule data from {}...", data_dir.display());
    let store = JsonStore::load(&data_dir).expect("Failed to load schedule data");
    println!("Loaded boards for {} stations", store.stations().await.len());

    let state = AppState::new(store, data_dir);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Display board server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health            - Health check");
    println!("  GET  /stations          - Stations with board data");
    println!("  GET  /board/departures  - Departure board (?station=...&platform=...&type=...)");
    println!("  GET  /board/arrivals    - Arrival board");
    println!("  POST /reload            - Re-read the data directory");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
