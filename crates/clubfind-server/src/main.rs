mod api;
mod cache;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};
use crate::cache::ResultCache;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = clubfind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let refdata = Arc::new(clubfind_core::RefData::load(&config.refdata_path));
    let display = Arc::new(clubfind_core::load_display_config(
        &config.display_config_path,
    )?);
    let backend = Arc::new(clubfind_llm::ChatClient::new(
        &config.llm_base_url,
        config.llm_api_key.clone(),
        &config.llm_model,
        config.llm_request_timeout_secs,
    )?);
    let catalog = Arc::new(clubfind_catalog::CatalogClient::new(
        config.catalog_request_timeout_secs,
        &config.catalog_user_agent,
    )?);
    let cache = Arc::new(ResultCache::new(config.result_cache_ttl_secs));

    let app = build_app(AppState {
        backend,
        catalog,
        refdata,
        display,
        cache,
    });

    tracing::info!(addr = %config.bind_addr, env = %config.env, "starting server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
