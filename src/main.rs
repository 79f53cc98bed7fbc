use anyhow::Result;
use builders_api::{
    application::{
        ports::{
            identity::IdentityProvider, storage::ObjectStorage, time::Clock, util::SlugGenerator,
            workspace::WorkspaceDirectory,
        },
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::{
        comment::CommentRepository, notification::NotificationRepository,
        profile::ProfileRepository, project::ProjectRepository,
    },
    infrastructure::{
        notion::NotionWorkspace,
        supabase::{
            SupabaseClient, SupabaseCommentRepository, SupabaseIdentityProvider,
            SupabaseNotificationRepository, SupabaseProfileRepository, SupabaseProjectRepository,
            SupabaseStorage,
        },
        time::SystemClock,
        util::DefaultSlugGenerator,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let supabase = Arc::new(SupabaseClient::new(
        config.supabase_url(),
        config.supabase_anon_key(),
        config.supabase_service_role_key(),
        config.http_timeout(),
    )?);

    let identity: Arc<dyn IdentityProvider> =
        Arc::new(SupabaseIdentityProvider::new(Arc::clone(&supabase)));
    let storage: Arc<dyn ObjectStorage> = Arc::new(SupabaseStorage::new(Arc::clone(&supabase)));
    let workspace: Arc<dyn WorkspaceDirectory> = Arc::new(NotionWorkspace::new(
        config.notion_token(),
        config.notion_database_id(),
        config.http_timeout(),
    )?);

    let profile_repo: Arc<dyn ProfileRepository> =
        Arc::new(SupabaseProfileRepository::new(Arc::clone(&supabase)));
    let project_repo: Arc<dyn ProjectRepository> =
        Arc::new(SupabaseProjectRepository::new(Arc::clone(&supabase)));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(SupabaseCommentRepository::new(Arc::clone(&supabase)));
    let notification_repo: Arc<dyn NotificationRepository> =
        Arc::new(SupabaseNotificationRepository::new(Arc::clone(&supabase)));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        identity,
        workspace,
        storage,
        profile_repo,
        project_repo,
        comment_repo,
        notification_repo,
        clock,
        slugger,
        config.auth_redirect_url(),
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(supabase = %config.supabase_url(), "listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

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
            tracing::error!(error = %err, "failed to listen for ctrl-c");
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
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
