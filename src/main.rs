mod catalog;
mod domain;
mod error;
mod services;
mod state;
mod web;

use crate::catalog::Catalog;
use crate::state::{AppState, SharedState};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = Catalog::global();
    tracing::info!(
        phases = catalog.templates.len(),
        personas = catalog.personas.len(),
        mood_energy_rules = catalog.mood_energy.len(),
        symptoms = catalog.symptoms.len(),
        "recommendation catalog loaded"
    );

    let shared: SharedState = Arc::new(AppState { catalog });

    let app = web::routes(shared)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
        let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        format!("0.0.0.0:{}", port)
    });
    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
