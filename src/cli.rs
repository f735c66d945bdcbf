use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::RelayConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Flags win over environment variables, which win over defaults.
#[derive(Parser, Debug, PartialEq)]
#[command(name = "gitlab_sentry_relay")]
#[command(about = "Forwards GitLab push hooks to a Sentry release webhook", version)]
pub struct CliArgs {
    /// Address to listen on
    #[arg(long, env = "APP_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "APP_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// GitLab secret token; leave empty to accept every request
    #[arg(long, env = "GITLAB_TOKEN", default_value = "", hide_env_values = true)]
    pub secret: String,

    /// URL of the Sentry release webhook
    #[arg(long, env = "SENTRY_URL", hide_env_values = true)]
    pub sentry: String,

    /// Timeout for the outbound request, in seconds
    #[arg(long, env = "RELAY_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Directory for rolling log files (console only when unset)
    #[arg(long, env = "RELAY_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl CliArgs {
    pub fn to_config(&self) -> RelayConfig {
        RelayConfig {
            host: self.host.clone(),
            port: self.port,
            secret: self.secret.clone(),
            target_url: self.sentry.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}
