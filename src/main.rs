use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use ecell_site::store::ContentStore;
use ecell_site::web::{self, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let api_base = std::env::var("API_BASE_URL").unwrap_or_default();
    let state = Data::new(AppState::new(ContentStore::seeded(), api_base));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    tracing::info!(%bind_addr, "starting ecell-site");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(web::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
    })
    .bind(bind_addr)?
    .run()
    .await
}
