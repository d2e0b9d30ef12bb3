use super::model::Place;

/// Case-insensitive literal substring match of `query` (already trimmed) in `name`
pub fn matches_query(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Places whose name contains the trimmed query, or all places when the query
/// is blank
pub fn filter_places(places: &[Place], query: &str) -> Vec<Place> {
    let query = query.trim();
    if query.is_empty() {
        return places.to_vec();
    }
    places
        .iter()
        .filter(|place| matches_query(&place.name, query))
        .cloned()
        .collect()
}
