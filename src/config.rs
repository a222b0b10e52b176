use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
    pub report_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_host = env::var("SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let report_interval_secs = env::var("REPORT_INTERVAL_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u64>()
            .context("REPORT_INTERVAL_SECS must be a positive integer")?;

        // tokio's interval timer panics on a zero period
        anyhow::ensure!(
            report_interval_secs > 0,
            "REPORT_INTERVAL_SECS must be a positive integer, got 0"
        );

        Ok(Config {
            service_host,
            service_port,
            report_interval_secs,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  Service listening on: {}:{}",
            self.service_host,
            self.service_port
        );
        tracing::info!("  Report interval: {}s", self.report_interval_secs);
    }
}
