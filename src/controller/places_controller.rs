use serde::{Deserialize, Serialize};

use crate::classifier::{classify, Classification};
use crate::controller::SectionView;
use crate::grid::{filter_and_sort, GridQuery};
use crate::helpers::format::meta_pill;
use crate::models::place::Place;
use crate::ranker::{select_top_picks, TopPicksConfig};
use crate::state::Section;

pub const NO_PLACES_NOTICE: &str = "No places found.";

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PlaceCard {
    pub name: String,
    pub address: String,
    pub photo_url: Option<String>,
    pub maps_url: Option<String>,
    pub meta: String,
    pub classification: Classification,
}

impl From<&Place> for PlaceCard {
    fn from(place: &Place) -> Self {
        Self {
            name: place.name.clone(),
            address: place.address.clone().unwrap_or_default(),
            photo_url: place.photo_url.clone(),
            maps_url: place.maps_url.clone(),
            meta: meta_pill(place),
            classification: classify(place),
        }
    }
}

fn cards(places: Vec<&Place>) -> Vec<PlaceCard> {
    places.into_iter().map(PlaceCard::from).collect()
}

/// Top-picks carousel. Hidden rather than shown empty when nothing qualifies.
pub fn top_picks_view(places: &Section<Place>, config: &TopPicksConfig) -> SectionView<PlaceCard> {
    let items = cards(select_top_picks(places.items(), config));

    match places.error() {
        Some(message) => SectionView::error(message, items),
        None if items.is_empty() => SectionView::Hidden,
        None => SectionView::Ready { items },
    }
}

pub fn grid_view(places: &Section<Place>, query: &GridQuery) -> SectionView<PlaceCard> {
    let items = cards(filter_and_sort(places.items(), query));

    match places.error() {
        Some(message) => SectionView::error(message, items),
        None => SectionView::ready_or_empty(items, NO_PLACES_NOTICE),
    }
}
