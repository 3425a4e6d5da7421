use serde::{Deserialize, Serialize};

use crate::models::attraction::Attraction;
use crate::models::place::Place;
use crate::ranker::top_score;
use crate::state::AppState;

pub const HERO_ATTRACTION_LIMIT: usize = 14;
pub const HERO_PLACE_LIMIT: usize = 6;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HeroSource {
    Attractions,
    Places,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct HeroSlide {
    pub name: String,
    pub image_url: String,
    pub link: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct HeroView {
    pub source: HeroSource,
    pub slides: Vec<HeroSlide>,
}

pub fn attraction_slides(attractions: &[Attraction]) -> Vec<HeroSlide> {
    attractions
        .iter()
        .filter_map(|a| {
            a.image().map(|image| HeroSlide {
                name: a.name.clone(),
                image_url: image.to_string(),
                link: a.link().map(String::from),
            })
        })
        .take(HERO_ATTRACTION_LIMIT)
        .collect()
}

/// Best-scoring photo-bearing places, ignoring category quotas.
pub fn place_slides(places: &[Place]) -> Vec<HeroSlide> {
    let mut scored: Vec<(f64, &Place)> = places
        .iter()
        .filter(|p| p.has_photo())
        .map(|p| (top_score(p), p))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .take(HERO_PLACE_LIMIT)
        .map(|(_, p)| HeroSlide {
            name: p.name.clone(),
            image_url: p.photo_url.clone().unwrap_or_default(),
            link: p.maps_url.clone(),
        })
        .collect()
}

/// Attractions claim the hero; places fill it only when attractions are
/// unavailable or have no usable images.
pub fn hero_view(state: &AppState) -> HeroView {
    if !state.attractions.is_failed() {
        let slides = attraction_slides(state.attractions.items());
        if !slides.is_empty() {
            return HeroView {
                source: HeroSource::Attractions,
                slides,
            };
        }
    }

    HeroView {
        source: HeroSource::Places,
        slides: place_slides(state.places.items()),
    }
}
