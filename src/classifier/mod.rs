//! Place classification: hawker-centre detection and category tagging.
//!
//! Name evidence always wins over the upstream taxonomy. `primary_type` only
//! introduces tags when the name says nothing; otherwise it and `types` may
//! only confirm a category the name already declared.

use serde::{Deserialize, Serialize};

use crate::models::category::CategoryTags;
use crate::models::place::Place;

pub mod rules;

use rules::{CATEGORY_RULES, FOOD_COURT_TYPE, HAWKER_CENTRE_NAMES};

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    pub is_hawker: bool,
    pub tags: CategoryTags,
}

/// Hawker centres carry no category tags; they are shown only as hawker.
pub fn classify(place: &Place) -> Classification {
    if is_hawker(place) {
        return Classification {
            is_hawker: true,
            tags: CategoryTags::new(),
        };
    }

    Classification {
        is_hawker: false,
        tags: categorize(place),
    }
}

/// An explicit `is_hawker_centre` flag is trusted verbatim. Without one, a
/// canonical hawker-centre name or a `food_court` type marks the place.
pub fn is_hawker(place: &Place) -> bool {
    if let Some(flag) = place.is_hawker_centre {
        return flag;
    }

    let name = place.name.trim().to_lowercase();
    let canonical_name_hit = HAWKER_CENTRE_NAMES.iter().any(|h| name.contains(h));

    let primary_type = lowercase_primary_type(place);
    let meta_hit = primary_type == FOOD_COURT_TYPE
        || lowercase_types(place).iter().any(|t| t == FOOD_COURT_TYPE);

    canonical_name_hit || meta_hit
}

pub fn categorize(place: &Place) -> CategoryTags {
    let primary_type = lowercase_primary_type(place);
    let types = lowercase_types(place);

    let name_hits: Vec<bool> = CATEGORY_RULES
        .iter()
        .map(|rule| rule.name_matches(&place.name))
        .collect();

    let mut tags: CategoryTags = CATEGORY_RULES
        .iter()
        .zip(&name_hits)
        .filter(|(_, hit)| **hit)
        .map(|(rule, _)| rule.category)
        .collect();

    if tags.is_empty() {
        for rule in CATEGORY_RULES.iter() {
            if rule.primary_type_matches(&primary_type) {
                tags.insert(rule.category);
            }
        }
    } else {
        for (rule, _) in CATEGORY_RULES.iter().zip(&name_hits).filter(|(_, hit)| **hit) {
            if rule.primary_type_matches(&primary_type) {
                tags.insert(rule.category);
            }
        }
    }

    for (rule, _) in CATEGORY_RULES.iter().zip(&name_hits).filter(|(_, hit)| **hit) {
        if rule.types_match(&types) {
            tags.insert(rule.category);
        }
    }

    tags
}

fn lowercase_primary_type(place: &Place) -> String {
    place
        .primary_type
        .as_deref()
        .unwrap_or_default()
        .to_lowercase()
}

fn lowercase_types(place: &Place) -> Vec<String> {
    place.types.iter().map(|t| t.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;

    fn place(name: &str, primary_type: Option<&str>, types: &[&str]) -> Place {
        Place {
            name: name.to_string(),
            primary_type: primary_type.map(String::from),
            types: types.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn tags_of(categories: &[Category]) -> CategoryTags {
        categories.iter().copied().collect()
    }

    #[test]
    fn explicit_hawker_flag_wins() {
        let mut lau_pa_sat = place("Lau Pa Sat", Some("food_court"), &["food_court"]);
        lau_pa_sat.is_hawker_centre = Some(false);
        assert!(!is_hawker(&lau_pa_sat));

        let mut plain = place("Some Bistro", Some("restaurant"), &[]);
        plain.is_hawker_centre = Some(true);
        assert!(is_hawker(&plain));
    }

    #[test]
    fn canonical_names_mark_hawker_centres() {
        assert!(is_hawker(&place("  Lau Pa Sat  ", None, &[])));
        assert!(is_hawker(&place("Maxwell Food Centre", Some("tourist_attraction"), &[])));
        assert!(is_hawker(&place("Chinatown Complex Market & Food Centre", None, &[])));
    }

    #[test]
    fn food_court_type_marks_hawker_centres() {
        assert!(is_hawker(&place("Stall 12", Some("food_court"), &[])));
        assert!(is_hawker(&place("Stall 12", Some("FOOD_COURT"), &[])));
        assert!(is_hawker(&place("Stall 12", None, &["point_of_interest", "food_court"])));
    }

    #[test]
    fn generic_market_wording_is_not_a_hawker_centre() {
        let mut wet_market = place("Tiong Bahru Market", Some("market"), &["market"]);
        wet_market.address = Some("30 Seng Poh Rd, Hawker Centre, Singapore".into());
        assert!(!is_hawker(&wet_market));
    }

    #[test]
    fn name_evidence_beats_unrelated_primary_type() {
        let stall = place("Char Kway Teow Bar", Some("restaurant"), &["restaurant", "food"]);
        assert_eq!(categorize(&stall), tags_of(&[Category::Bars]));
    }

    #[test]
    fn primary_type_is_a_fallback_when_name_is_silent() {
        assert_eq!(categorize(&place("XYZ", Some("cafe"), &[])), tags_of(&[Category::Cafes]));
        assert_eq!(
            categorize(&place("XYZ", Some("wine_bar"), &[])),
            tags_of(&[Category::Bars])
        );
        assert_eq!(
            categorize(&place("Kinokuniya", Some("book_store"), &[])),
            tags_of(&[Category::Bookstores])
        );
        assert!(categorize(&place("XYZ", Some("gym"), &["restaurant"])).is_empty());
    }

    #[test]
    fn name_patterns_can_fire_together() {
        let tags = categorize(&place("Wine Bistro", None, &[]));
        assert_eq!(tags, tags_of(&[Category::Bars, Category::Restaurants]));

        let tags = categorize(&place("Books & Coffee", Some("book_store"), &["cafe"]));
        assert_eq!(tags, tags_of(&[Category::Cafes, Category::Bookstores]));
    }

    #[test]
    fn alcohol_words_count_as_bar_evidence() {
        assert!(categorize(&place("The Gin Parlour", None, &[])).contains(Category::Bars));
        assert!(categorize(&place("Smith Street Taps: Craft Beer", None, &[])).contains(Category::Bars));
    }

    #[test]
    fn matching_is_case_insensitive_and_word_bounded() {
        assert!(categorize(&place("THE COFFEE ACADEMICS", None, &[])).contains(Category::Cafes));
        assert!(categorize(&place("Café Natsu", None, &[])).contains(Category::Cafes));
        // "barber" and "ginger" must not trip the bar patterns
        assert!(categorize(&place("Ginger Barber", None, &[])).is_empty());
    }

    #[test]
    fn cjk_bookstore_names() {
        assert_eq!(
            categorize(&place("诚品书店", None, &[])),
            tags_of(&[Category::Bookstores])
        );
    }

    #[test]
    fn classification_is_idempotent() {
        let p = place("Tanjong Pagar Kitchen & Bar", Some("bar"), &["bar", "restaurant"]);
        let first = classify(&p);
        assert_eq!(first, classify(&p));
        assert_eq!(first.tags, tags_of(&[Category::Bars, Category::Restaurants]));
        assert!(!first.is_hawker);
    }

    #[test]
    fn hawker_classification_drops_tags() {
        let p = place("Maxwell Food Centre Kitchen", Some("restaurant"), &[]);
        assert!(!categorize(&p).is_empty());

        let classification = classify(&p);
        assert!(classification.is_hawker);
        assert!(classification.tags.is_empty());
    }

    #[test]
    fn empty_place_has_no_evidence() {
        assert_eq!(classify(&Place::default()), Classification::default());
    }
}
