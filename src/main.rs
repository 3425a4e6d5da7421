use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;

use amara_nearby::config::Config;
use amara_nearby::controller::build_page;
use amara_nearby::repositories::feed_repo::{FeedRepo, FeedSource};
use amara_nearby::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    let source = FeedSource::parse(&config.feed_base);
    info!("Loading feeds from {:?}", source);

    let repo = FeedRepo::new(source);
    let state = AppState::load(&repo).await;
    let page = build_page(&state, &config.page_query());

    let output = if config.pretty {
        serde_json::to_string_pretty(&page)
    } else {
        serde_json::to_string(&page)
    }
    .context("Failed to serialize page view")?;
    println!("{}", output);

    Ok(())
}
