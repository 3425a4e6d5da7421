use clap::Parser;

use crate::controller::PageQuery;
use crate::grid::{GridQuery, SortKey};
use crate::models::category::CategoryFilter;
use crate::ranker::TopPicksConfig;

#[derive(Parser, Clone, Debug)]
#[clap(about = "Classifies and ranks the nearby-places feeds for the hotel page")]
pub struct Config {
    /// Base URL or local directory holding places.json, events.json and featured_attractions.json
    #[clap(env, long, default_value = "public/data")]
    pub feed_base: String,

    #[clap(env, long, default_value_t = 0.0)]
    pub min_rating: f64,

    /// all, restaurants, cafes, bars, bookstores or hawker
    #[clap(env, long, default_value = "all")]
    pub category: CategoryFilter,

    /// rating-desc, distance-asc or name
    #[clap(env, long, default_value = "rating-desc")]
    pub sort: SortKey,

    #[clap(env, long, default_value_t = 12)]
    pub top_picks_limit: usize,

    #[clap(env, long, default_value = "all")]
    pub event_category: String,

    #[clap(env, long)]
    pub pretty: bool,
}

impl Config {
    pub fn page_query(&self) -> PageQuery {
        PageQuery {
            grid: GridQuery {
                min_rating: self.min_rating,
                category: self.category,
                sort: self.sort,
            },
            top_picks: TopPicksConfig::with_limit(self.top_picks_limit),
            event_category: self.event_category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;

    #[test]
    fn parses_page_options() {
        let config = Config::try_parse_from([
            "amara-nearby",
            "--feed-base",
            "https://example.com/data",
            "--min-rating",
            "4.2",
            "--category",
            "cafes",
            "--sort",
            "distance-asc",
            "--top-picks-limit",
            "8",
        ])
        .unwrap();

        let query = config.page_query();
        assert_eq!(query.grid.category, CategoryFilter::Tag(Category::Cafes));
        assert_eq!(query.grid.sort, SortKey::DistanceAsc);
        assert_eq!(query.grid.min_rating, 4.2);
        assert_eq!(query.top_picks.limit, 8);
        assert_eq!(query.event_category, "all");
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(Config::try_parse_from(["amara-nearby", "--category", "museums"]).is_err());
    }

    #[test]
    fn sort_defaults_to_rating_and_rejects_unknown_keys() {
        let config = Config::try_parse_from(["amara-nearby"]).unwrap();
        assert_eq!(config.sort, SortKey::RatingDesc);
        assert!(Config::try_parse_from(["amara-nearby", "--sort", "price"]).is_err());
    }
}
