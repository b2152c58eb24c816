//! Complain portal backend entry point
//!
//! Boots the actix-web HTTP server: loads configuration from the
//! environment, connects to MongoDB, and wires CORS, access logging,
//! rate limiting and the route table. The database handle and the token
//! service are injected into the request path with `web::Data`.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::info;

use complain_portal_backend::config::AppConfig;
use complain_portal_backend::db::Database;
use complain_portal_backend::routes::configure_all_routes;
use complain_portal_backend::services::auth::TokenService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_logging();

    info!("🚀 complain portal backend starting...");

    let config = AppConfig::from_env();

    let database = Database::new(&config.db)
        .await
        .expect("MongoDB connection failed");
    let token_service = TokenService::new(config.jwt.secret.clone());

    start_http_server(config, database, token_service).await
}

/// Configures and runs the HTTP server.
async fn start_http_server(
    config: AppConfig,
    database: Database,
    token_service: TokenService,
) -> std::io::Result<()> {
    let bind_address = (config.server.host.clone(), config.server.port);

    info!(
        "🌐 serving at http://{}:{}",
        config.server.host, config.server.port
    );

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .expect("invalid rate limit configuration");

    info!(
        "🛡️ rate limiting: {} req/s, burst {}",
        config.rate_limit.per_second, config.rate_limit.burst_size
    );

    let db_data = web::Data::new(database);
    let token_data = web::Data::new(token_service);

    HttpServer::new(move || {
        App::new()
            .app_data(db_data.clone())
            .app_data(token_data.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// Initializes logging from `RUST_LOG` (default: info, actix debug).
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS for the portal frontend. The portal serves a public API, so any
/// origin may call it, matching the source deployment.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
