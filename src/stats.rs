use std::collections::HashMap;

const TOP_ITEMS: usize = 10;

/// Full frequency table over `items`: the total item count plus every
/// distinct item ranked by descending count. Items with equal counts keep
/// the order in which they first appeared.
pub fn rank_by_frequency(items: &[String]) -> (usize, Vec<(String, usize)>) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for item in items {
        let count = counts.entry(item.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(item.as_str());
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|item| (item.to_string(), counts.get(item).copied().unwrap_or(0)))
        .collect();
    // Stable sort, so ties keep first-appearance order //
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    (items.len(), ranked)
}

/// Top ten items with their percentage share of the whole input. The
/// shares are taken against ALL items, not just the listed ten, so they
/// need not sum to 100. An empty input yields `(0, [])`.
pub fn count_item_frequencies(items: &[String]) -> (usize, Vec<(String, f64)>) {
    let (total_items, ranked) = rank_by_frequency(items);
    if total_items == 0 {
        return (0, Vec::new());
    }

    let item_percentages = ranked
        .into_iter()
        .take(TOP_ITEMS)
        .map(|(item, count)| (item, (count as f64 / total_items as f64) * 100.0))
        .collect();
    (total_items, item_percentages)
}
