//! Daily Awareness server binary.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use daily_awareness::adapters::ai::{GeminiConfig, GeminiProvider};
use daily_awareness::adapters::clock::SystemClock;
use daily_awareness::adapters::http::{api_router, CheckInAppState, GenerateAppState};
use daily_awareness::adapters::random::SeededChoiceSource;
use daily_awareness::adapters::storage::{FileCheckInRepository, InMemoryCheckInRepository};
use daily_awareness::application::{
    AdviceGeneratorConfig, GenerateAdviceHandler, SessionOrchestrator,
};
use daily_awareness::config::{AppConfig, StorageBackend};
use daily_awareness::ports::CheckInRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config);

    if !config.ai.has_api_key() {
        warn!("No Gemini API key configured; every check-in will receive fallback advice");
    }

    let provider = GeminiProvider::new(
        GeminiConfig::new(config.ai.gemini_api_key.clone())
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    )?;

    let repository: Arc<dyn CheckInRepository> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryCheckInRepository::new()),
        StorageBackend::File => Arc::new(FileCheckInRepository::new(&config.storage.data_dir)),
    };

    let choices = Arc::new(SeededChoiceSource::from_entropy());
    let generator = Arc::new(GenerateAdviceHandler::new(
        Arc::new(provider),
        choices.clone(),
        AdviceGeneratorConfig {
            timeout: config.ai.timeout(),
            temperature: Some(config.ai.temperature),
            ..AdviceGeneratorConfig::default()
        },
    ));
    let orchestrator = Arc::new(SessionOrchestrator::new(
        repository,
        generator.clone(),
        Arc::new(SystemClock),
        choices,
    ));

    let app = api_router(
        GenerateAppState::new(generator),
        CheckInAppState::new(orchestrator),
        &config.server,
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        %addr,
        model = %config.ai.model,
        storage = ?config.storage.backend,
        "Daily Awareness listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
