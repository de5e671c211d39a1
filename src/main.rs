use std::sync::Arc;

use book_recs_api::{
    config::Config,
    routes::{create_router, AppState},
    services::{
        catalog::GoogleBooksCatalog, generator::GeminiGenerator, BookRecommender, EngineSettings,
        RecommendationEngine,
    },
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("book_recs_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let generator = GeminiGenerator::new(
        reqwest::Client::new(),
        config.gemini_api_key.clone(),
        config.gemini_api_url.clone(),
        config.gemini_model.clone(),
    );
    let catalog = GoogleBooksCatalog::new(
        reqwest::Client::new(),
        config.books_api_url.clone(),
        config.books_api_key.clone(),
    );

    let engine = RecommendationEngine::new(
        BookRecommender::new(Arc::new(generator)),
        Arc::new(catalog),
        EngineSettings {
            lookup_delay: config.lookup_delay(),
            recommendation_count: config.recommendation_count,
            showcase_count: config.showcase_count,
        },
    );

    let app = create_router(Arc::new(AppState::new(engine)));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        model = %config.gemini_model,
        "Book recommendation server listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
