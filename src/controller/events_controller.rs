use serde::{Deserialize, Serialize};

use crate::controller::SectionView;
use crate::models::event::Event;
use crate::state::Section;

pub const EVENTS_DISPLAY_CAP: usize = 24;
pub const NO_EVENTS_NOTICE: &str = "No events found.";
pub const ALL_EVENT_CATEGORIES: &str = "all";

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct EventCard {
    pub title: String,
    pub location: String,
    pub start: String,
    pub image: String,
    pub url: Option<String>,
    pub category: String,
}

impl From<&Event> for EventCard {
    fn from(event: &Event) -> Self {
        Self {
            title: event.display_title().to_string(),
            location: event.location_text(),
            start: event.start.clone().unwrap_or_default(),
            image: event.image.clone().unwrap_or_default(),
            url: event.url.clone(),
            category: event.category_key(),
        }
    }
}

/// Events with an image, optionally restricted to one category, soonest
/// first. Events whose start cannot be parsed go last.
pub fn filter_events<'a>(events: &'a [Event], category: &str) -> Vec<&'a Event> {
    let category = category.trim().to_lowercase();

    let mut items: Vec<(Option<time::OffsetDateTime>, &Event)> = events
        .iter()
        .filter(|e| category == ALL_EVENT_CATEGORIES || e.category_key() == category)
        .filter(|e| e.has_image())
        .map(|e| (e.start_time(), e))
        .collect();

    items.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    items
        .into_iter()
        .take(EVENTS_DISPLAY_CAP)
        .map(|(_, e)| e)
        .collect()
}

pub fn events_view(events: &Section<Event>, category: &str) -> SectionView<EventCard> {
    let items: Vec<EventCard> = filter_events(events.items(), category)
        .into_iter()
        .map(EventCard::from)
        .collect();

    match events.error() {
        Some(message) => SectionView::error(message, items),
        None => SectionView::ready_or_empty(items, NO_EVENTS_NOTICE),
    }
}
