use tracing::warn;

use crate::models::attraction::Attraction;
use crate::models::event::Event;
use crate::models::place::Place;
use crate::repositories::feed_repo::FeedRepo;

/// Records of one feed plus the error of its latest load, if that failed.
/// A failed load keeps whatever the previous successful load produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Section<T> {
    items: Vec<T>,
    error: Option<String>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
        }
    }
}

impl<T> Section<T> {
    pub fn loaded(items: Vec<T>) -> Self {
        Self { items, error: None }
    }

    pub fn from_result(feed: &str, result: anyhow::Result<Vec<T>>) -> Self {
        let mut section = Self::default();
        section.apply(feed, result);
        section
    }

    /// A successful load replaces the items wholesale; nothing is merged.
    pub fn apply(&mut self, feed: &str, result: anyhow::Result<Vec<T>>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                warn!("Failed to load {} feed due to: {:#}", feed, e);
                self.error = Some(format!("Could not load {}.", feed));
            }
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Session state: the latest records of each feed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub places: Section<Place>,
    pub events: Section<Event>,
    pub attractions: Section<Attraction>,
}

impl AppState {
    /// Fetches all three feeds concurrently; each result lands in its own section.
    pub async fn load(repo: &FeedRepo) -> Self {
        let mut state = Self::default();
        state.refresh(repo).await;
        state
    }

    pub async fn refresh(&mut self, repo: &FeedRepo) {
        let (places, events, attractions) = futures::join!(
            repo.fetch_places(),
            repo.fetch_events(),
            repo.fetch_attractions(),
        );

        self.places.apply("places", places);
        self.events.apply("events", events);
        self.attractions.apply("attractions", attractions);
    }
}
