//! Price command implementation

use crate::config::Config;
use crate::present::{build_reply, build_status_line};
use crate::price::{CoinDeskClient, PriceSource};
use clap::Args;

#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Print the raw quote as JSON
    #[arg(long)]
    pub json: bool,
}

impl PriceArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = CoinDeskClient::with_config(config.price.client_config())?;
        let quote = client.fetch().await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&quote)?);
        } else {
            println!("{}", build_reply(&quote));
            println!("{}", build_status_line(&quote));
        }

        Ok(())
    }
}
