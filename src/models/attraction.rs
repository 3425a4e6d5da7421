use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError};

#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Attraction {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub name: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub address: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub image: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub maps_url: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub website: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub url: Option<String>,
}

fn first_non_empty<'a>(candidates: &[&'a Option<String>]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .map(str::trim)
        .find(|c| !c.is_empty())
}

impl Attraction {
    pub fn image(&self) -> Option<&str> {
        first_non_empty(&[&self.image_url, &self.photo_url, &self.image])
    }

    pub fn link(&self) -> Option<&str> {
        first_non_empty(&[&self.maps_url, &self.website, &self.url])
    }
}

/// `featured_attractions.json` is `{ "attractions": [...] }` or a bare array.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum AttractionsFeed {
    Wrapped {
        #[serde(default)]
        attractions: Vec<Attraction>,
    },
    Bare(Vec<Attraction>),
}

impl AttractionsFeed {
    pub fn into_attractions(self) -> Vec<Attraction> {
        match self {
            AttractionsFeed::Wrapped { attractions } => attractions,
            AttractionsFeed::Bare(attractions) => attractions,
        }
    }
}
