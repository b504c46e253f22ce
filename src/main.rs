use anyhow::Result;
use rigshare::application::{
    ports::{ClockPort, ImageStorePort, RandomSourcePort},
    services::ApplicationServices,
};
use rigshare::config::AppConfig;
use rigshare::domain::{image::UserImageRepository, like::LikeRepository, user::UserRepository};
use rigshare::infrastructure::{
    database,
    images::LocalImageStore,
    random::ThreadRngRandomSource,
    repositories::{PostgresLikeRepository, PostgresUserImageRepository, PostgresUserRepository},
    time::SystemClock,
};
use rigshare::presentation::http::{routes::build_router, state::HttpState};
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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let image_repo: Arc<dyn UserImageRepository> =
        Arc::new(PostgresUserImageRepository::new(pool.clone()));
    let like_repo: Arc<dyn LikeRepository> = Arc::new(PostgresLikeRepository::new(pool.clone()));

    let image_store: Arc<ImageStorePort> = Arc::new(LocalImageStore::new(
        config.image_store_dir(),
        config.image_base_url(),
    ));
    let random: Arc<RandomSourcePort> = Arc::new(ThreadRngRandomSource);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        image_repo,
        like_repo,
        image_store,
        random,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

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
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
