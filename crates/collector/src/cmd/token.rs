use anyhow::{Context, Result};
use tracing::info;

use lyricline_core::{obtain_bearer_token, Config};

pub async fn run(config: &Config) -> Result<()> {
    let twitter = &config.search.twitter;
    info!("Requesting bearer token from {}", twitter.api_url);

    let token = obtain_bearer_token(twitter)
        .await
        .context("Failed to obtain bearer token")?;

    println!("{}", token);
    eprintln!("Set it as search.twitter.bearer_token (or LYRICLINE_SEARCH__TWITTER__BEARER_TOKEN)");
    Ok(())
}
