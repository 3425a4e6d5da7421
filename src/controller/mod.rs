use serde::{Deserialize, Serialize};

use crate::grid::GridQuery;
use crate::ranker::TopPicksConfig;
use crate::state::AppState;

pub mod events_controller;
pub mod hero_controller;
pub mod places_controller;

use events_controller::{events_view, EventCard, ALL_EVENT_CATEGORIES};
use hero_controller::{hero_view, HeroView};
use places_controller::{grid_view, top_picks_view, PlaceCard};

/// What the renderer should show for one page section.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SectionView<T> {
    Ready { items: Vec<T> },
    Empty { notice: String },
    Hidden,
    /// Load failed; `items` is whatever an earlier load left behind.
    Error { message: String, items: Vec<T> },
}

impl<T> SectionView<T> {
    pub fn ready_or_empty(items: Vec<T>, notice: &str) -> Self {
        if items.is_empty() {
            SectionView::Empty {
                notice: notice.to_string(),
            }
        } else {
            SectionView::Ready { items }
        }
    }

    pub fn error(message: &str, items: Vec<T>) -> Self {
        SectionView::Error {
            message: message.to_string(),
            items,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageQuery {
    pub grid: GridQuery,
    pub top_picks: TopPicksConfig,
    pub event_category: String,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            grid: GridQuery::default(),
            top_picks: TopPicksConfig::default(),
            event_category: ALL_EVENT_CATEGORIES.to_string(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PageView {
    pub hero: HeroView,
    pub top_picks: SectionView<PlaceCard>,
    pub places: SectionView<PlaceCard>,
    pub events: SectionView<EventCard>,
}

pub fn build_page(state: &AppState, query: &PageQuery) -> PageView {
    PageView {
        hero: hero_view(state),
        top_picks: top_picks_view(&state.places, &query.top_picks),
        places: grid_view(&state.places, &query.grid),
        events: events_view(&state.events, &query.event_category),
    }
}
