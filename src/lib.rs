//! Classification and ranking of the nearby-places feeds behind the hotel's
//! informational page.
//!
//! Feeds are loaded into an [`state::AppState`], places are tagged by
//! [`classifier::classify`], ranked by [`ranker::top_score`] and shaped into
//! section views by [`controller::build_page`] for an external renderer.

pub mod classifier;
pub mod config;
pub mod controller;
pub mod grid;
pub mod helpers;
pub mod models;
pub mod ranker;
pub mod repositories;
pub mod state;
