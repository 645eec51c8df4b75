use std::{env, sync::Arc};

use anyhow::Context;
use api::{config::StoreBackend, AppState, Config};
use aws_config::BehaviorVersion;
use domain::{
    orders::{cqrs, OrderCommandBus, Services},
    seed::seed_reference_data,
    store::{DocumentStore, DynamoStore, MemoryStore},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_env();
    let (store, commands) = connect(&config).await;

    match seed_reference_data(store.as_ref()).await {
        Ok(report) => tracing::info!(
            hospitals = report.hospitals,
            medicines = report.medicines,
            "Seeding finished"
        ),
        Err(err) => tracing::error!("Seeding failed: {}", err),
    }

    let app = api::router(AppState::new(store, commands), &config.cors_origins);

    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        let app = tower::ServiceBuilder::new()
            .layer(axum_aws_lambda::LambdaLayer::default())
            .service(app);

        lambda_http::run(app)
            .await
            .map_err(|err| anyhow::anyhow!("Lambda runtime failed: {err}"))?;
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn connect(config: &Config) -> (Arc<dyn DocumentStore>, Arc<dyn OrderCommandBus>) {
    let endpoint = match &config.store {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory store");
            let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
            let commands: Arc<dyn OrderCommandBus> =
                cqrs::init_in_memory(cqrs::init_repo(store.clone()), Services::default());
            return (store, commands);
        }
        StoreBackend::Aws => None,
        StoreBackend::Endpoint(url) => Some(url.clone()),
    };

    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(url) = &endpoint {
        loader = loader.endpoint_url(url);
    }
    let sdk_config = loader.load().await;
    let client = aws_sdk_dynamodb::Client::new(&sdk_config);

    tracing::info!(
        db = %config.db_name,
        endpoint = endpoint.as_deref().unwrap_or("default"),
        "Using DynamoDB store"
    );

    let store: Arc<dyn DocumentStore> =
        Arc::new(DynamoStore::new(client.clone(), config.db_name.clone()));
    let commands: Arc<dyn OrderCommandBus> = cqrs::init(
        client,
        cqrs::init_repo(store.clone()),
        &config.event_log_table,
        &config.event_snapshots_table,
    );

    (store, commands)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
