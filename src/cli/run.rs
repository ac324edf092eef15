//! Run command implementation

use crate::config::Config;
use crate::discord;
use clap::Args;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the status refresh interval (milliseconds)
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut config = config.clone();
        if let Some(interval_ms) = self.interval_ms {
            config.status.update_interval_ms = interval_ms;
            config.validate()?;
        }

        discord::run_bot(&config).await
    }
}
