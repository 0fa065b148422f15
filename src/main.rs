use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use lostfound_match::config::{LoggingSettings, Settings};
use lostfound_match::routes::{self, matches::AppState};
use lostfound_match::services::ItemsApiClient;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("Configuration error: {}", e))
    })?;

    init_logging(&settings.logging);

    info!("Starting lost & found matching service...");

    let items_api = ItemsApiClient::new(
        settings.items_api.base_url.clone(),
        settings.items_api.timeout_secs.unwrap_or(30),
    )
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    info!("Items API client initialized ({})", items_api.base_url());

    let matcher = settings.matcher();

    info!(
        "Matcher initialized (scheme: {}, min score: {})",
        matcher.scheme().as_str(),
        matcher.min_score()
    );

    let app_state = AppState {
        matcher,
        enhanced: settings.enhanced_options(),
        items_api: Arc::new(items_api),
        search_limit: settings.items_api.search_limit.unwrap_or(100),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
