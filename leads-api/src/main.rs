/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Lead API server entry point.
//!
//! A standalone Axum service that validates and stores leads submitted by
//! the roof inspection landing page.

use leads_api::config::Config;
use leads_api::db::leads as db_leads;
use leads_api::routes;
use leads_api::state::AppState;
use leads_api::store::LeadStore;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().expect("failed to load configuration");

    let store = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(url)
                .await
                .expect("failed to connect to PostgreSQL");
            db_leads::ensure_schema(&pool)
                .await
                .expect("failed to create leads table");
            tracing::info!("Connected to PostgreSQL");
            LeadStore::postgres(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; leads are kept in memory and lost on restart");
            LeadStore::memory()
        }
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    tracing::info!("Storing leads in {}", store.backend_name());

    let state = AppState::new(store);
    let app = routes::router().layer(cors).with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind listener");

    tracing::info!("Lead API listening on {}", config.listen_addr);

    axum::serve(listener, app).await.expect("server error");
}
