//! Resume Maker Web - form in, PDF out.
//!
//! Serves the resume form, keeps the latest submission in a cookie-backed
//! session, and exports the rendered resume as a PDF via wkhtmltopdf.

mod helpers;
mod routes;
mod session;
mod state;
mod templates;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use resume_maker_core::AppConfig;
use state::AppState;

/// Resolve the static files directory.
///
/// Priority:
/// 1. Explicit path if provided
/// 2. ./static if it exists
/// 3. Crate's built-in static directory
fn resolve_static_dir(explicit_path: Option<&str>) -> PathBuf {
    if let Some(path) = explicit_path {
        return PathBuf::from(path);
    }

    // Try ./static first (works in development and when running from crate dir)
    let local_static = PathBuf::from("static");
    if local_static.exists() && local_static.is_dir() {
        return local_static;
    }

    // Fall back to compiled-in path (useful for cargo run)
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

/// Application router: pages plus the session layer.
///
/// Factored out of `main` so tests can drive the exact same routing and
/// session behavior without binding a socket.
fn app(state: Arc<AppState>) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Router::new()
        .route("/", get(routes::index))
        .route("/preview", post(routes::preview))
        .route("/download", get(routes::download))
        .layer(session_layer)
        .with_state(state)
}

#[derive(Parser, Debug)]
#[command(name = "resume-maker-web")]
#[command(author, version, about = "Resume Maker Web Server", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Path to the wkhtmltopdf binary (overrides the config file)
    #[arg(long, env = "WKHTMLTOPDF_BIN")]
    converter: Option<PathBuf>,

    /// Configuration file (TOML); defaults to ./resume-maker.toml if present
    #[arg(long, env = "RESUME_MAKER_CONFIG")]
    config: Option<PathBuf>,

    /// Static files directory (defaults to ./static or crate's static dir)
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<String>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::load(),
    };

    if let Some(binary) = args.converter {
        config.converter.binary = binary;
    }

    let static_dir = resolve_static_dir(args.static_dir.as_deref());
    info!(
        converter = %config.converter.binary.display(),
        static_dir = %static_dir.display(),
        "Resolved configuration"
    );

    let state = Arc::new(AppState::new(config, &static_dir));

    let app = app(state)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
