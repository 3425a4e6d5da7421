use regex::Regex;

use crate::models::category::Category;

/// Known hawker-centre names, matched as substrings of the lowercased name.
pub const HAWKER_CENTRE_NAMES: &[&str] = &[
    "lau pa sat",
    "maxwell food centre",
    "maxwell food center",
    "amoy street food centre",
    "amoy street food center",
    "chinatown complex",
    "chinatown hawker center",
    "chinatown hawker centre",
];

pub const FOOD_COURT_TYPE: &str = "food_court";

/// Evidence for one category: name patterns, the `primary_type` substring
/// and the `types` entries that corroborate it.
pub struct CategoryRule {
    pub category: Category,
    pub name_patterns: Vec<Regex>,
    pub primary_type_hint: &'static str,
    pub type_hints: &'static [&'static str],
}

impl CategoryRule {
    pub fn name_matches(&self, name: &str) -> bool {
        self.name_patterns.iter().any(|re| re.is_match(name))
    }

    pub fn primary_type_matches(&self, primary_type: &str) -> bool {
        primary_type.contains(self.primary_type_hint)
    }

    pub fn types_match(&self, types: &[String]) -> bool {
        types
            .iter()
            .any(|t| self.type_hints.iter().any(|hint| t.contains(hint)))
    }
}

lazy_static::lazy_static! {
    pub static ref CATEGORY_RULES: Vec<CategoryRule> = vec![
        CategoryRule {
            category: Category::Cafes,
            name_patterns: vec![
                Regex::new(r"(?i)\b(café|cafe|coffee|espresso|roastery|coffee\s*bar|bakery)\b").unwrap(),
            ],
            primary_type_hint: "cafe",
            type_hints: &["cafe", "coffee_shop"],
        },
        CategoryRule {
            category: Category::Bars,
            name_patterns: vec![
                Regex::new(r"(?i)\b(bar|pub|taproom|wine\s*bar|speakeasy)\b").unwrap(),
                Regex::new(
                    r"(?i)\b(cocktail|cocktails|wine|beer|ale|lager|ipa|stout|porter|whisky|whiskey|gin|rum|tequila|mezcal|soju|sake|spirits|liqueur)\b",
                )
                .unwrap(),
            ],
            primary_type_hint: "bar",
            type_hints: &["bar", "wine_bar", "pub"],
        },
        CategoryRule {
            category: Category::Restaurants,
            name_patterns: vec![
                Regex::new(r"(?i)\b(restaurant|ristorante|trattoria|bistro|eatery|osteria|cantina|kitchen|diner)\b").unwrap(),
            ],
            primary_type_hint: "restaurant",
            type_hints: &["restaurant"],
        },
        CategoryRule {
            category: Category::Bookstores,
            name_patterns: vec![
                Regex::new(r"(?i)\b(bookstore|book\s*shop|book\s*store|books|comics|manga)\b").unwrap(),
                // CJK words have no word boundaries inside a name like 诚品书店
                Regex::new(r"书店|書店|书屋|書屋").unwrap(),
            ],
            primary_type_hint: "book_store",
            type_hints: &["book_store"],
        },
    ];
}
