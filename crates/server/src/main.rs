use cinematch_core::catalog::Catalog;
use cinematch_core::config;
use cinematch_core::loader::{load_movies, load_ratings};
use cinematch_core::session::Session;
use cinematch_server::api::create_router;
use cinematch_server::api::handlers::AppState;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cinematch", about = "Movie recommendation HTTP service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Path to the movies CSV (movieId,title,genres)
    #[arg(long, default_value = "data/movies.csv")]
    movies: PathBuf,

    /// Path to the ratings CSV (userId,movieId,rating[,timestamp])
    #[arg(long, default_value = "data/ratings.csv")]
    ratings: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(
                    "cinematch_server=info"
                        .parse()
                        .expect("valid directive literal"),
                )
                .add_directive(
                    "cinematch_core=info"
                        .parse()
                        .expect("valid directive literal"),
                ),
        )
        .init();

    let args = Args::parse();

    if args.port == 0 {
        eprintln!("Error: port must be > 0");
        std::process::exit(1);
    }

    // Load failures are fatal at this boundary; the engine assumes
    // well-formed tables from here on.
    let start = Instant::now();
    let catalog: Catalog = load_movies(&args.movies).unwrap_or_else(|e| {
        eprintln!("Error: failed to load '{}': {}", args.movies.display(), e);
        std::process::exit(1);
    });
    let ratings = load_ratings(&args.ratings).unwrap_or_else(|e| {
        eprintln!("Error: failed to load '{}': {}", args.ratings.display(), e);
        std::process::exit(1);
    });
    tracing::info!(
        movies = catalog.len(),
        ratings = ratings.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "tables loaded"
    );

    let session = Arc::new(Session::new(catalog, ratings));
    // Build the title index up front so the first query doesn't pay for it.
    session.refresh_if_stale();
    tracing::info!("title index built");

    let state = AppState {
        session,
        start_time: Instant::now(),
    };
    let app = create_router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
