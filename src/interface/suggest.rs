use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a name to count as a suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Names similar to `query`, best match first.
pub fn suggest_meal_names<'a>(query: &str, names: &[&'a str]) -> Vec<&'a str> {
    let query = query.to_lowercase();

    let mut candidates: Vec<(&str, f64)> = names
        .iter()
        .map(|name| (*name, jaro_winkler(&name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(name, _)| name)
        .collect()
}
