use amara_nearby::classifier::classify;
use amara_nearby::grid::{filter_and_sort, GridQuery, SortKey};
use amara_nearby::models::category::{Category, CategoryFilter};
use amara_nearby::models::place::Place;
use amara_nearby::ranker::{select_top_picks, TopPicksConfig};

fn neighbourhood() -> Vec<Place> {
    let names = [
        ("Burnt Ends", "restaurant"),
        ("Esquina", "spanish_restaurant"),
        ("Lolla Restaurant", "restaurant"),
        ("Meta Kitchen", "korean_restaurant"),
        ("Nylon Coffee Roasters", "cafe"),
        ("Chye Seng Huat Hardware", "cafe"),
        ("Tiong Bahru Bakery", "bakery"),
        ("Apartment Coffee", "cafe"),
        ("Jigger & Pony", "bar"),
        ("Native", "cocktail_bar"),
        ("Smith Street Taps", "bar"),
        ("Sago House", "bar"),
        ("BooksActually", "book_store"),
        ("Kinokuniya Books", "book_store"),
        ("Littered with Books", "book_store"),
        ("Maxwell Food Centre", "food_court"),
        ("Lau Pa Sat", "tourist_attraction"),
        ("Red Dot Design Museum", "museum"),
    ];

    names
        .iter()
        .enumerate()
        .map(|(i, (name, primary_type))| Place {
            name: name.to_string(),
            primary_type: Some(primary_type.to_string()),
            rating: Some(4.0 + (i % 9) as f64 * 0.1),
            rating_count: Some(100.0 + i as f64 * 37.0),
            distance_m: Some(100.0 * i as f64),
            photo_url: Some(format!("https://example.com/{}.jpg", i)),
            ..Default::default()
        })
        .collect()
}

#[test]
fn top_picks_take_three_from_each_category() {
    let places = neighbourhood();
    let picks = select_top_picks(&places, &TopPicksConfig::default());
    assert_eq!(picks.len(), 12);

    for category in Category::ALL {
        let count = picks
            .iter()
            .take(12)
            .filter(|p| {
                let tags = classify(p).tags;
                Category::ALL
                    .iter()
                    .find(|c| tags.contains(**c))
                    .map_or(false, |first| *first == category)
            })
            .count();
        assert_eq!(count, 3, "expected three {} picks", category);
    }
}

#[test]
fn hawker_and_restaurant_views_never_overlap() {
    let places = neighbourhood();
    for sort in [SortKey::RatingDesc, SortKey::DistanceAsc, SortKey::Name] {
        let hawker = filter_and_sort(
            &places,
            &GridQuery { category: CategoryFilter::Hawker, sort, ..Default::default() },
        );
        let restaurants = filter_and_sort(
            &places,
            &GridQuery { category: CategoryFilter::Tag(Category::Restaurants), sort, ..Default::default() },
        );

        assert_eq!(hawker.len(), 2);
        assert!(hawker.iter().all(|h| restaurants.iter().all(|r| h.name != r.name)));
    }
}

#[test]
fn grid_all_is_stable_under_repetition() {
    let places = neighbourhood();
    let query = GridQuery::default();
    let first: Vec<String> = filter_and_sort(&places, &query).iter().map(|p| p.name.clone()).collect();
    let second: Vec<String> = filter_and_sort(&places, &query).iter().map(|p| p.name.clone()).collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), places.len() - 2);
}
