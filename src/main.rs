use github_tool::infrastructures::adapters::primary::tools::ToolRouter;
use github_tool::infrastructures::adapters::primary::web::{AppState, create_router};
use github_tool::infrastructures::adapters::secondary::external_apis::github::GitHubApiAdapter;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, info_span, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const GITHUB_API_BASE: &str = "https://api.github.com";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()
        .map_err(|error| anyhow::anyhow!("Failed to create OTLP exporter: {error}"))?;
    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(otlp_exporter)
        .build();
    let tracer = provider.tracer("github-tool");

    let telemetry = tracing_opentelemetry::layer().with_tracer(tracer);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(telemetry)
        .with(fmt_layer)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let initialize_span = info_span!("initialize");
    let _enter = initialize_span.enter();
    info!("Application starting");

    // GitHub Token の読み込み — optional: without it only issue creation is
    // degraded, the read operations keep working.
    let github_token = env::var("GITHUB_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty());
    if github_token.is_none() {
        warn!("GITHUB_TOKEN is not set; create_issue will refuse to run");
    }

    // Build dependencies
    let github_api = Arc::new(GitHubApiAdapter::new(GITHUB_API_BASE.to_string()));
    let tools = Arc::new(ToolRouter::new(github_api, github_token));
    let app_state = Arc::new(AppState { tools });

    // Create router
    let app = create_router(app_state);

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
