mod booking;
mod cache;
mod catalog;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use tracing::info;

use crate::cache::SessionCache;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let config = Config::from_env()?;
    let catalog = Catalog::from_config(&config).context("failed to load doctor catalog")?;
    info!(
        "serving {} doctors, sessions idle out after {}s",
        catalog.doctors().len(),
        config.session_idle.as_secs()
    );

    let sessions = SessionCache::new(config.max_sessions, config.session_idle);
    let state = web::Data::new(AppState::new(catalog, sessions));

    info!("listening on {}:{}", config.host, config.port);

    let app = move || App::new().app_data(state.clone()).configure(routes::init);
    HttpServer::new(app)
        .bind((config.host.as_str(), config.port))
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
        .run()
        .await?;

    Ok(())
}
