//! Wiring & DI. Entry point: bootstrap the completion adapter, inject it into
//! the insight service, answer one request read from stdin.
//! No business logic here.

use dotenv::dotenv;
use journey_insights::adapters::ai::{MockCompletionAdapter, OpenAiAdapter};
use journey_insights::domain::{SessionDescriptor, UserActivitySnapshot};
use journey_insights::ports::CompletionPort;
use journey_insights::shared::AppConfig;
use journey_insights::usecases::InsightService;
use serde::Deserialize;
use std::io::Read;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// One request, tagged by operation.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Request {
    SessionSummary(SessionDescriptor),
    Sentiment { text: String },
    PersonalInsights(UserActivitySnapshot),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    // --- Completion port: credentials are checked here, once ---
    let completion: Arc<dyn CompletionPort> = if cfg.is_ai_mock() {
        info!("using mock completion adapter; every reply is a fallback");
        Arc::new(MockCompletionAdapter::failing())
    } else {
        let api_key = cfg.require_ai_api_key()?;
        let adapter = OpenAiAdapter::new(
            cfg.ai_api_url_or_default(),
            api_key,
            cfg.ai_model_or_default(),
            cfg.ai_request_timeout(),
        )?;
        info!(model = adapter.model(), "completion adapter ready");
        Arc::new(adapter)
    };

    let service = InsightService::new(completion, cfg.insight_settings());

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let request: Request = serde_json::from_str(&input)
        .map_err(|e| anyhow::anyhow!("invalid request on stdin: {}", e))?;

    let output = match request {
        Request::SessionSummary(session) => serde_json::to_string_pretty(
            &service
                .generate_session_summary_with_provenance(&session)
                .await,
        )?,
        Request::Sentiment { text } => serde_json::to_string_pretty(
            &service.analyze_sentiment_with_provenance(&text).await,
        )?,
        Request::PersonalInsights(activity) => {
            activity.validate()?;
            serde_json::to_string_pretty(
                &service
                    .generate_personal_insights_with_provenance(&activity)
                    .await,
            )?
        }
    };

    println!("{}", output);
    Ok(())
}
