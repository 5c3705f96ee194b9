//! Sends one short test message through the configured SMTP transport, so an
//! operator can validate credentials without burning a generation call.

use anyhow::Result;
use lk_trend_agent::{AgentConfig, Mailer, SmtpMailer};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_target(false).init();

    let config = AgentConfig::from_env()?;
    let mailer = SmtpMailer::from_config(&config)?;
    mailer
        .send(
            "lk-trend-agent SMTP probe",
            "If you can read this, the SMTP settings are good.",
        )
        .await?;

    println!("smtp-probe done");
    Ok(())
}
