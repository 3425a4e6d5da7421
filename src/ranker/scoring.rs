use crate::models::place::Place;

/// Weight of the prior, in phantom ratings.
pub const PRIOR_STRENGTH: f64 = 25.0;
pub const PRIOR_MEAN: f64 = 4.3;
/// Distance at which the proximity bonus reaches zero.
pub const PROXIMITY_RADIUS_M: f64 = 1200.0;

/// Rating shrunk toward `PRIOR_MEAN` in proportion to how few ratings exist.
pub fn bayesian_rating(place: &Place) -> f64 {
    let rating = place.rating().unwrap_or(0.0);
    let count = place.rating_count().unwrap_or(0.0);
    (PRIOR_STRENGTH * PRIOR_MEAN + count * rating) / (PRIOR_STRENGTH + count)
}

/// Linear bonus from 1.0 at the reference point to 0.0 at `PROXIMITY_RADIUS_M`.
pub fn proximity_boost(place: &Place) -> f64 {
    match place.distance() {
        Some(d) => (1.0 - d.min(PROXIMITY_RADIUS_M) / PROXIMITY_RADIUS_M).max(0.0),
        None => 0.0,
    }
}

/// Desirability used to rank top picks. Not normalized; only the ordering
/// it induces is meaningful.
pub fn top_score(place: &Place) -> f64 {
    bayesian_rating(place) + proximity_boost(place)
}
