use portfolio::config::{AppConfig, LogFormat};
use portfolio::{app_router, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_logging(&config)?;

    if !config.gemini_configured() {
        tracing::warn!("GEMINI_API_KEY not set; assistant replies will fall back to the error message");
    }
    if !tokio::fs::try_exists(&config.resume_path).await.unwrap_or(false) {
        tracing::warn!("Resume not found at {}; /resume will return 404", config.resume_path.display());
    }

    let bind_addr = config.bind_addr;
    let ttl = chrono::Duration::minutes(config.session_ttl_minutes);
    let state = Arc::new(AppState::with_gemini(config));

    // Expire sessions whose page was closed without a pagehide beacon
    let sweep_sessions = Arc::clone(&state.sessions);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = sweep_sessions.cleanup_expired(ttl).await;
            if removed > 0 {
                tracing::info!("Expired {} idle visit sessions", removed);
            }
        }
    });

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}

fn init_logging(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug,portfolio=trace,reqwest=info,hyper=info,tower=info".to_string()
        } else {
            "info,portfolio=info,reqwest=warn,hyper=warn,tower=warn".to_string()
        }
    });

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    let fmt_layer = match config.log_format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .with_thread_ids(true)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
    };

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init()?;

    tracing::info!("Portfolio starting up...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Build mode: {}", if cfg!(debug_assertions) { "development" } else { "production" });
    tracing::info!("Log level: {}", log_level);
    tracing::info!(
        "Configuration - Gemini AI: {}, model: {}, resume: {}",
        if config.gemini_configured() { "✅" } else { "❌" },
        config.gemini_model,
        config.resume_path.display()
    );

    Ok(())
}
