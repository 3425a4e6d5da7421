use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restaurants,
    Cafes,
    Bars,
    Bookstores,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Restaurants,
        Category::Cafes,
        Category::Bars,
        Category::Bookstores,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Restaurants => "restaurants",
            Category::Cafes => "cafes",
            Category::Bars => "bars",
            Category::Bookstores => "bookstores",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| anyhow!("Unknown category: {}", s))
    }
}

/// Set of category tags held by a single place. A place may carry several.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategoryTags(BTreeSet<Category>);

impl CategoryTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category) {
        self.0.insert(category);
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Category> for CategoryTags {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Category selection for the grid view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Tag(Category),
    Hawker,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl FromStr for CategoryFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "hawker" => Ok(CategoryFilter::Hawker),
            other => Ok(CategoryFilter::Tag(other.parse()?)),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Tag(category) => category.fmt(f),
            CategoryFilter::Hawker => f.write_str("hawker"),
        }
    }
}
