use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use trip_server::domain::Coord;
use trip_server::lines::TransitLine;
use trip_server::location::FixedPosition;
use trip_server::osrm::{OsrmClient, OsrmConfig};
use trip_server::otp::{OtpClient, OtpConfig};
use trip_server::places::grenoble_landmarks;
use trip_server::search::{SearchConfig, TripPlanner, TripSearch};
use trip_server::web::{AppState, create_router};

/// Default origin when ORIGIN_POSITION is not set (the Ensimag campus).
const DEFAULT_ORIGIN: (f64, f64) = (45.193548, 5.768362);

/// The five Grenoble tram lines with bundled geometry.
const LINE_NAMES: [&str; 5] = ["A", "B", "C", "D", "E"];

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Upstream endpoints, overridable for testing against local instances
    let mut otp_config = OtpConfig::new();
    if let Ok(url) = std::env::var("OTP_BASE_URL") {
        otp_config = otp_config.with_base_url(url);
    }
    let mut osrm_config = OsrmConfig::new();
    if let Ok(url) = std::env::var("OSRM_BASE_URL") {
        osrm_config = osrm_config.with_base_url(url);
    }

    let otp = OtpClient::new(otp_config).expect("Failed to create planner client");
    let road = OsrmClient::new(osrm_config).expect("Failed to create road-routing client");

    // A server has no device position; searches start from a configured origin
    let origin = match std::env::var("ORIGIN_POSITION") {
        Ok(raw) => Coord::parse(&raw).unwrap_or_else(|e| {
            eprintln!("Warning: ORIGIN_POSITION is invalid ({e}), using default.");
            default_origin()
        }),
        Err(_) => default_origin(),
    };

    let search = TripSearch::new(
        TripPlanner::new(otp, road),
        std::sync::Arc::new(grenoble_landmarks()),
        std::sync::Arc::new(FixedPosition::new(origin)),
        SearchConfig::default(),
    );

    // Tram line traces are optional; the API works without them
    let lines = match std::env::var("LINES_DIR") {
        Ok(dir) => load_lines(&dir),
        Err(_) => Vec::new(),
    };
    if !lines.is_empty() {
        println!("Loaded {} transit line traces", lines.len());
    }

    let state = AppState::new(search, lines);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Trip planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health   - Health check");
    println!("  POST /search   - Start a search {{\"query\": \"...\"}}");
    println!("  POST /reset    - Discard results and in-flight searches");
    println!("  GET  /results  - Current four-mode result set");
    println!("  GET  /lines    - Static tram line traces");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

fn default_origin() -> Coord {
    // The literal is in range; this cannot fail.
    Coord::new(DEFAULT_ORIGIN.0, DEFAULT_ORIGIN.1).expect("default origin is valid")
}

/// Load `tram_<x>.geojson` traces from a directory, skipping failures.
fn load_lines(dir: &str) -> Vec<TransitLine> {
    let mut lines = Vec::new();

    for name in LINE_NAMES {
        let path = format!("{}/tram_{}.geojson", dir, name.to_lowercase());
        match TransitLine::from_file(name, &path) {
            Ok(line) => lines.push(line),
            Err(e) => eprintln!("Warning: skipping line {name}: {e}"),
        }
    }

    lines
}
