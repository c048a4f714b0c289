mod config;

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use dreamgarden_api::GardenService;
use dreamgarden_engine::Responder;
use dreamgarden_store::{MemStore, NewUser, Store};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dreamgarden=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    // Init store
    let store: Arc<dyn Store> = Arc::new(MemStore::new());
    if config.seed_demo {
        seed_demo_user(store.as_ref())?;
    }

    let service = GardenService::new(store, Responder::default())
        .with_plant_window(config.plant_window)
        .with_chat_history(config.chat_history);

    let app = dreamgarden_api::router(Arc::new(service))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr()?;
    info!("DreamGarden listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Demo account with a head start, so the garden has something to spend.
fn seed_demo_user(store: &dyn Store) -> anyhow::Result<()> {
    let user = store.create_user(NewUser {
        dewdrops: 127,
        sunlight: 89,
        ..NewUser::new("demo", "demo")
    })?;
    info!("Seeded demo user '{}' with id {}", user.username, user.id);
    Ok(())
}
