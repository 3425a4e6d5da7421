use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnError};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::helpers::format::to_text;

pub const DEFAULT_EVENT_CATEGORY: &str = "general";

#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Event {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub title: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub name: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub venue: Value,
    #[serde(default)]
    pub address: Value,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub image: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub url: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub category: Option<String>,
}

impl Event {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Venue text, falling back to the address when the venue is empty.
    pub fn location_text(&self) -> String {
        let venue = to_text(&self.venue);
        if venue.is_empty() {
            to_text(&self.address)
        } else {
            venue
        }
    }

    pub fn category_key(&self) -> String {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_EVENT_CATEGORY)
            .to_lowercase()
    }

    pub fn has_image(&self) -> bool {
        self.image
            .as_deref()
            .map_or(false, |image| !image.trim().is_empty())
    }

    /// Parsed start time. Naive timestamps and bare dates are read as UTC.
    pub fn start_time(&self) -> Option<OffsetDateTime> {
        let start = self.start.as_deref()?.trim();
        if start.is_empty() {
            return None;
        }

        if let Ok(parsed) = OffsetDateTime::parse(start, &Rfc3339) {
            return Some(parsed);
        }
        if let Ok(parsed) =
            PrimitiveDateTime::parse(start, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"))
        {
            return Some(parsed.assume_utc());
        }
        if let Ok(parsed) =
            PrimitiveDateTime::parse(start, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        {
            return Some(parsed.assume_utc());
        }
        Date::parse(start, format_description!("[year]-[month]-[day]"))
            .ok()
            .map(|date| date.midnight().assume_utc())
    }
}

/// `events.json` is `{ "events": [...] }`, a bare array, or split into
/// `this_week` / `next_30_days` lists.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum EventsFeed {
    Wrapped {
        events: Vec<Event>,
    },
    Windowed {
        #[serde(default)]
        this_week: Vec<Event>,
        #[serde(default)]
        next_30_days: Vec<Event>,
    },
    Bare(Vec<Event>),
}

impl EventsFeed {
    pub fn into_events(self) -> Vec<Event> {
        match self {
            EventsFeed::Wrapped { events } => events,
            EventsFeed::Windowed {
                mut this_week,
                next_30_days,
            } => {
                this_week.extend(next_30_days);
                this_week
            }
            EventsFeed::Bare(events) => events,
        }
    }
}
