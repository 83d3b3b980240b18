use strsim::jaro_winkler;

const MIN_SCORE: f64 = 0.8;

fn normalize(name: &str) -> String {
    name.replace(' ', "").to_lowercase()
}

/// Station names resembling `query`, best match first.
///
/// Comparison ignores case and spaces; candidates scoring at or below
/// `MIN_SCORE` are dropped and ties keep their original order.
pub fn closest_station_names<'a, I>(query: &str, names: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = normalize(query);
    let mut scored: Vec<(&str, f64)> = names
        .into_iter()
        .map(|name| (name, jaro_winkler(&query, &normalize(name))))
        .filter(|(_, score)| *score > MIN_SCORE)
        .collect();
    scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    scored
        .into_iter()
        .take(limit)
        .map(|(name, _)| name.to_string())
        .collect()
}
