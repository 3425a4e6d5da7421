use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst};

/// A nearby place as produced by the places feed. Every field is optional on
/// the wire; malformed values decode as absent instead of failing the feed.
#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Place {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub name: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub address: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub primary_type: Option<String>,
    #[serde_as(as = "DefaultOnError<Vec<DefaultOnError>>")]
    #[serde(default)]
    pub types: Vec<String>,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    pub rating_count: Option<f64>,
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    pub distance_m: Option<f64>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub maps_url: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub is_hawker_centre: Option<bool>,
}

impl Place {
    pub fn has_photo(&self) -> bool {
        self.photo_url
            .as_deref()
            .map_or(false, |url| !url.trim().is_empty())
    }

    /// Rating when present and numeric.
    pub fn rating(&self) -> Option<f64> {
        self.rating.filter(|r| r.is_finite())
    }

    /// Rating count when present, finite and non-negative. Integral floats
    /// such as `1000.0` count the same as `1000`.
    pub fn rating_count(&self) -> Option<f64> {
        self.rating_count.filter(|n| n.is_finite() && *n >= 0.0)
    }

    /// Distance in meters when present and finite.
    pub fn distance(&self) -> Option<f64> {
        self.distance_m.filter(|d| d.is_finite())
    }
}

/// `places.json` is either `{ "places": [...] }` or a bare array.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum PlacesFeed {
    Wrapped {
        #[serde(default)]
        places: Vec<Place>,
    },
    Bare(Vec<Place>),
}

impl PlacesFeed {
    pub fn into_places(self) -> Vec<Place> {
        match self {
            PlacesFeed::Wrapped { places } => places,
            PlacesFeed::Bare(places) => places,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_place_from_feed_record() {
        let place: Place = serde_json::from_value(json!({
            "name": "Lau Pa Sat",
            "rating": 4.2,
            "rating_count": 35120,
            "address": "18 Raffles Quay, Singapore 048582",
            "place_id": "ChIJ",
            "maps_url": "https://maps.google.com/?cid=1",
            "photo_url": "https://example.com/p.jpg",
            "types": ["food_court", "restaurant"],
            "primary_type": "food_court",
            "distance_m": 640.5
        }))
        .unwrap();

        assert_eq!(place.name, "Lau Pa Sat");
        assert_eq!(place.rating, Some(4.2));
        assert_eq!(place.rating_count(), Some(35120.0));
        assert_eq!(place.types, vec!["food_court", "restaurant"]);
        assert_eq!(place.distance(), Some(640.5));
        assert!(place.has_photo());
        assert_eq!(place.is_hawker_centre, None);
    }

    #[test]
    fn malformed_fields_degrade_to_absent() {
        let place: Place = serde_json::from_value(json!({
            "name": null,
            "rating": "not a number",
            "rating_count": -3,
            "distance_m": {"value": 10},
            "types": "restaurant",
            "is_hawker_centre": "yes",
            "photo_url": ""
        }))
        .unwrap();

        assert_eq!(place.name, "");
        assert_eq!(place.rating, None);
        assert_eq!(place.rating_count(), None);
        assert_eq!(place.distance_m, None);
        assert!(place.types.is_empty());
        assert_eq!(place.is_hawker_centre, None);
        assert!(!place.has_photo());
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let place: Place = serde_json::from_value(json!({
            "rating": "4.5",
            "rating_count": "120",
            "distance_m": "300"
        }))
        .unwrap();

        assert_eq!(place.rating(), Some(4.5));
        assert_eq!(place.rating_count(), Some(120.0));
        assert_eq!(place.distance(), Some(300.0));
    }

    #[test]
    fn integral_float_rating_count_matches_integer() {
        let as_float: Place = serde_json::from_value(json!({"rating": 5.0, "rating_count": 1000.0})).unwrap();
        let as_int: Place = serde_json::from_value(json!({"rating": 5.0, "rating_count": 1000})).unwrap();

        assert_eq!(as_float.rating_count(), Some(1000.0));
        assert_eq!(as_float.rating_count(), as_int.rating_count());
    }

    #[test]
    fn accepts_wrapped_and_bare_feeds() {
        let wrapped: PlacesFeed =
            serde_json::from_str(r#"{"meta": {}, "places": [{"name": "A"}]}"#).unwrap();
        let bare: PlacesFeed = serde_json::from_str(r#"[{"name": "A"}, {"name": "B"}]"#).unwrap();

        assert_eq!(wrapped.into_places().len(), 1);
        assert_eq!(bare.into_places().len(), 2);
    }
}
