use serde_json::Value;

use crate::models::place::Place;

const ADDRESS_KEYS: [&str; 5] = ["name", "address", "line1", "line2", "city"];

/// Human-readable distance: meters below 1 km, one decimal below 10 km.
pub fn format_distance(meters: f64) -> String {
    if !meters.is_finite() {
        return String::new();
    }
    if meters < 1000.0 {
        return format!("{} m", meters.round());
    }

    let km = meters / 1000.0;
    if km < 10.0 {
        format!("{:.1} km", km)
    } else {
        format!("{} km", km.round())
    }
}

/// `"4.5★ · 350 m"`, skipping whichever half is unavailable.
pub fn meta_pill(place: &Place) -> String {
    let rating = place
        .rating()
        .filter(|r| *r != 0.0)
        .map(|r| format!("{}★", r))
        .unwrap_or_default();
    let distance = place.distance().map(format_distance).unwrap_or_default();

    [rating, distance]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Flattens a venue/address value that may be a string, a list or an object.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(to_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => ADDRESS_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .map(to_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Number(n) => n.to_string(),
        Value::Bool(_) | Value::Null => String::new(),
    }
}
