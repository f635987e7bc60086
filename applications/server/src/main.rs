/// Aria Server - read-only music catalog server
use aria_core::types::CreateSong;
use aria_server::{api, config::ServerConfig, state::AppState};
use axum::{routing::get, Router};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Demo songs share one placeholder source, matching the client fallback
const DEMO_AUDIO_URL: &str = "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav";

#[derive(Parser)]
#[command(name = "aria-server")]
#[command(about = "Aria music catalog server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Insert the demo songs into the catalog
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aria_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            serve().await?;
        }
        Commands::Seed => {
            seed().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Aria Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = aria_storage::create_pool(&config.storage.database_url).await?;
    aria_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Build application state and router
    let app_state = AppState::new(pool);
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(app_state: AppState) -> Router {
    // The catalog is read-only over HTTP: queries only, no write routes
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/songs", get(api::songs::list_songs))
        .route("/songs/:id", get(api::songs::get_song));

    Router::new()
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn seed() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;

    let pool = aria_storage::create_pool(&config.storage.database_url).await?;
    aria_storage::run_migrations(&pool).await?;

    let demo_songs = [
        CreateSong::new("Classical Symphony No. 1", DEMO_AUDIO_URL),
        CreateSong::new("Jazz Blues Melody", DEMO_AUDIO_URL),
        CreateSong::new("Rock Guitar Anthem", DEMO_AUDIO_URL),
        CreateSong::new("Electronic Dance Beat", DEMO_AUDIO_URL),
    ];

    for input in demo_songs {
        input.validate()?;
        let song = aria_storage::songs::insert(&pool, input).await?;
        tracing::info!(id = song.id, name = %song.name, "Seeded song");
    }

    Ok(())
}
