use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

use crate::classifier::{categorize, is_hawker};
use crate::models::category::CategoryFilter;
use crate::models::place::Place;

pub const GRID_DISPLAY_CAP: usize = 24;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    RatingDesc,
    DistanceAsc,
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::RatingDesc, SortKey::DistanceAsc, SortKey::Name];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::RatingDesc => "rating-desc",
            SortKey::DistanceAsc => "distance-asc",
            SortKey::Name => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| anyhow!("Unknown sort key: {}", s))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridQuery {
    pub min_rating: f64,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl GridQuery {
    /// Unrated places pass any threshold.
    fn passes_rating(&self, place: &Place) -> bool {
        place.rating().map_or(true, |r| r >= self.min_rating)
    }

    /// Hawker centres only ever appear under the hawker filter.
    fn passes_category(&self, place: &Place) -> bool {
        match self.category {
            CategoryFilter::Hawker => is_hawker(place),
            _ if is_hawker(place) => false,
            CategoryFilter::All => true,
            CategoryFilter::Tag(category) => categorize(place).contains(category),
        }
    }
}

pub fn filter_and_sort<'a>(places: &'a [Place], query: &GridQuery) -> Vec<&'a Place> {
    let mut items: Vec<&Place> = places
        .iter()
        .filter(|p| p.has_photo())
        .filter(|p| query.passes_rating(p))
        .filter(|p| query.passes_category(p))
        .collect();

    match query.sort {
        SortKey::RatingDesc => items.sort_by(|a, b| compare_rating_desc(a, b)),
        SortKey::DistanceAsc => items.sort_by(|a, b| compare_distance_asc(a, b)),
        SortKey::Name => items.sort_by(|a, b| compare_name(a, b)),
    }

    items.truncate(GRID_DISPLAY_CAP);
    items
}

fn compare_rating_desc(a: &Place, b: &Place) -> Ordering {
    let a = a.rating().unwrap_or(f64::NEG_INFINITY);
    let b = b.rating().unwrap_or(f64::NEG_INFINITY);
    b.total_cmp(&a)
}

fn compare_distance_asc(a: &Place, b: &Place) -> Ordering {
    let a = a.distance().unwrap_or(f64::INFINITY);
    let b = b.distance().unwrap_or(f64::INFINITY);
    a.total_cmp(&b)
}

fn compare_name(a: &Place, b: &Place) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}
