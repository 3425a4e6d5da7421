use tracing::debug;

use crate::classifier::categorize;
use crate::models::category::Category;
use crate::models::place::Place;
use crate::ranker::scoring::top_score;

pub const DEFAULT_TOP_PICKS_LIMIT: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quota {
    pub category: Category,
    pub quota: usize,
}

/// Selection settings. The order of `quotas` is both the bucket priority for
/// places carrying several tags and the draw order when filling quotas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopPicksConfig {
    pub limit: usize,
    pub quotas: Vec<Quota>,
}

impl Default for TopPicksConfig {
    fn default() -> Self {
        Self::with_limit(DEFAULT_TOP_PICKS_LIMIT)
    }
}

impl TopPicksConfig {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            quotas: [
                Category::Restaurants,
                Category::Cafes,
                Category::Bars,
                Category::Bookstores,
            ]
            .into_iter()
            .map(|category| Quota { category, quota: 3 })
            .collect(),
        }
    }
}

/// Picks a category-balanced shortlist of photo-bearing places.
///
/// Candidates are ranked by `top_score` (stable, so equal scores keep input
/// order), each quota is filled from its bucket in score order, and any
/// remaining slots are backfilled from the overall ranking.
pub fn select_top_picks<'a>(places: &'a [Place], config: &TopPicksConfig) -> Vec<&'a Place> {
    let mut scored: Vec<(f64, &Place)> = places
        .iter()
        .filter(|p| p.has_photo())
        .map(|p| (top_score(p), p))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    // Index into `scored`; the extra bucket collects untagged places.
    let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); config.quotas.len() + 1];
    for (idx, (_, place)) in scored.iter().enumerate() {
        let tags = categorize(place);
        let bucket = config
            .quotas
            .iter()
            .position(|q| tags.contains(q.category))
            .unwrap_or(config.quotas.len());
        buckets[bucket].push(idx);
    }
    debug!(
        "Top picks buckets: {:?}, other: {}",
        config
            .quotas
            .iter()
            .zip(&buckets)
            .map(|(q, b)| (q.category.as_str(), b.len()))
            .collect::<Vec<_>>(),
        buckets[config.quotas.len()].len()
    );

    let mut selected = vec![false; scored.len()];
    let mut picks: Vec<usize> = Vec::with_capacity(config.limit);

    for (quota, bucket) in config.quotas.iter().zip(&buckets) {
        for &idx in bucket.iter().take(quota.quota) {
            if picks.len() >= config.limit {
                break;
            }
            selected[idx] = true;
            picks.push(idx);
        }
    }

    for idx in 0..scored.len() {
        if picks.len() >= config.limit {
            break;
        }
        if !selected[idx] {
            selected[idx] = true;
            picks.push(idx);
        }
    }

    picks.truncate(config.limit);
    picks.into_iter().map(|idx| scored[idx].1).collect()
}
