//! Weekly trend report agent: binary entrypoint.
//! One run per invocation; an external scheduler (cron or similar) provides
//! the Monday cadence. Exit status is nonzero only when config, generation
//! transport or email delivery failed.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use lk_trend_agent::prompt::today_in_colombo;
use lk_trend_agent::{
    run_once, AgentConfig, FeedCollector, GeminiClient, SmtpMailer, GOOGLE_NEWS_LK,
    GOOGLE_TRENDS_DAILY_LK,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local runs; no-op when the scheduler injects real env.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = AgentConfig::from_env()?;
    let http = reqwest::Client::builder()
        .user_agent(concat!("lk-trend-agent/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("build http client")?;

    let collector = FeedCollector::new(http.clone());
    let trends_daily = collector.collect(&GOOGLE_TRENDS_DAILY_LK).await;
    let news = collector.collect(&GOOGLE_NEWS_LK).await;

    let generator = GeminiClient::new(http, &config);
    let mailer = SmtpMailer::from_config(&config)?;

    let date = today_in_colombo();
    let outcome = run_once(&date, &trends_daily, &news, &generator, &mailer).await?;
    tracing::info!(outcome = ?outcome, "run finished");
    Ok(())
}
