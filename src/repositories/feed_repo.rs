use std::path::PathBuf;

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::models::attraction::{Attraction, AttractionsFeed};
use crate::models::event::{Event, EventsFeed};
use crate::models::place::{Place, PlacesFeed};

pub const PLACES_FEED: &str = "places.json";
pub const EVENTS_FEED: &str = "events.json";
pub const ATTRACTIONS_FEED: &str = "featured_attractions.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedSource {
    Http(String),
    Directory(PathBuf),
}

impl FeedSource {
    /// `http://` and `https://` bases are fetched, anything else is a directory.
    pub fn parse(base: &str) -> Self {
        let trimmed = base.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            FeedSource::Http(trimmed.trim_end_matches('/').to_string())
        } else {
            FeedSource::Directory(PathBuf::from(trimmed))
        }
    }
}

pub struct FeedRepo {
    source: FeedSource,
    client: reqwest::Client,
}

impl FeedRepo {
    pub fn new(source: FeedSource) -> Self {
        Self {
            source,
            client: reqwest::Client::new(),
        }
    }

    async fn get_feed<T: DeserializeOwned>(&self, feed: &str) -> anyhow::Result<T> {
        match &self.source {
            FeedSource::Http(base) => {
                let url = format!("{}/{}", base, feed);
                self.client
                    .get(&url)
                    .send()
                    .await
                    .with_context(|| format!("Failed to request {}", url))?
                    .error_for_status()
                    .with_context(|| format!("Bad response for {}", url))?
                    .json::<T>()
                    .await
                    .with_context(|| format!("Failed to decode {}", url))
            }
            FeedSource::Directory(dir) => {
                let path = dir.join(feed);
                let content = tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to decode {}", path.display()))
            }
        }
    }

    pub async fn fetch_places(&self) -> anyhow::Result<Vec<Place>> {
        let places = self.get_feed::<PlacesFeed>(PLACES_FEED).await?.into_places();
        info!("Loaded {} places", places.len());
        Ok(places)
    }

    pub async fn fetch_events(&self) -> anyhow::Result<Vec<Event>> {
        let events = self.get_feed::<EventsFeed>(EVENTS_FEED).await?.into_events();
        info!("Loaded {} events", events.len());
        Ok(events)
    }

    pub async fn fetch_attractions(&self) -> anyhow::Result<Vec<Attraction>> {
        let attractions = self
            .get_feed::<AttractionsFeed>(ATTRACTIONS_FEED)
            .await?
            .into_attractions();
        info!("Loaded {} attractions", attractions.len());
        Ok(attractions)
    }
}
