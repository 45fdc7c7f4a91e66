use anyhow::Result;
use shiori::application::{
    ports::{time::Clock, upload::ImageUploader, util::SlugGenerator},
    services::{ApplicationServices, UploadFailurePolicy},
};
use shiori::config::AppConfig;
use shiori::domain::{
    category::CategoryRepository,
    post::{PostReadRepository, PostWriteRepository},
};
use shiori::infrastructure::{
    database,
    repositories::{SqliteCategoryRepository, SqlitePostReadRepository, SqlitePostWriteRepository},
    time::SystemClock,
    upload::{CloudinaryUploader, UnconfiguredUploader},
    util::RegexSlugGenerator,
};
use shiori::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(environment = ?config.environment(), "configuration loaded");

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let post_write_repo: Arc<dyn PostWriteRepository> =
        Arc::new(SqlitePostWriteRepository::new(Arc::clone(&pool)));
    let post_read_repo: Arc<dyn PostReadRepository> =
        Arc::new(SqlitePostReadRepository::new(Arc::clone(&pool)));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool)));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(RegexSlugGenerator::default());

    let image_uploader: Arc<dyn ImageUploader> = match config.cloudinary() {
        Some(settings) => Arc::new(CloudinaryUploader::new(settings.clone(), Arc::clone(&clock))),
        None => {
            tracing::warn!("cloudinary is not configured; image uploads will fail");
            Arc::new(UnconfiguredUploader)
        }
    };

    let upload_policy = if config.environment().is_production() {
        UploadFailurePolicy::Fail
    } else {
        UploadFailurePolicy::EchoDataUrl
    };

    let services = Arc::new(ApplicationServices::new(
        post_write_repo,
        post_read_repo,
        category_repo,
        image_uploader,
        clock,
        slugger,
        upload_policy,
    ));

    let state = HttpState {
        services,
        allowed_origins: config.allowed_origins().into(),
        max_upload_bytes: config.max_upload_bytes(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
