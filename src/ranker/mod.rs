//! Desirability scoring and the quota-balanced top-picks shortlist.

pub mod scoring;
pub mod top_picks;

pub use scoring::top_score;
pub use top_picks::{select_top_picks, Quota, TopPicksConfig};
