use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use log::info;

use ajar_api::routes::verification::{configure, AppState};
use ajar_api::{dto::verification::ErrorResponse, middleware};
use ajar_core::repositories::CodeStore;
use ajar_core::services::verification::{SmsGateway, VerificationService};
use ajar_infra::database::{create_pool, MySqlCodeStore};
use ajar_infra::sms::{MockSmsGateway, TwilioSmsGateway};
use ajar_shared::config::database::DatabaseConfig;
use ajar_shared::config::server::ServerConfig;
use ajar_shared::config::verification::VerificationConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Ajar verification API");

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let verification_config = VerificationConfig::from_env();

    let pool = create_pool(&database_config)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let store = Arc::new(MySqlCodeStore::new(pool));

    let provider = std::env::var("SMS_PROVIDER").unwrap_or_else(|_| "mock".to_string());
    match provider.as_str() {
        "twilio" => {
            let gateway = TwilioSmsGateway::from_env()
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            serve(Arc::new(gateway), store, verification_config, server_config).await
        }
        _ => {
            info!("SMS_PROVIDER={} - using mock SMS gateway", provider);
            serve(
                Arc::new(MockSmsGateway::new()),
                store,
                verification_config,
                server_config,
            )
            .await
        }
    }
}

async fn serve<S, R>(
    gateway: Arc<S>,
    store: Arc<R>,
    verification_config: VerificationConfig,
    server_config: ServerConfig,
) -> std::io::Result<()>
where
    S: SmsGateway + 'static,
    R: CodeStore + 'static,
{
    let service = Arc::new(VerificationService::new(
        gateway,
        store,
        verification_config,
    ));

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::cors::create_cors())
            .app_data(web::Data::new(AppState {
                verification_service: service.clone(),
            }))
            .configure(configure::<S, R>)
            .route("/health", web::get().to(health_check))
            .default_service(web::route().to(not_found))
    })
    .bind(&bind_address)?
    .run()
    .await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "ajar-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("not found"))
}
