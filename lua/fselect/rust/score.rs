use tracing::debug;

/// Shorter queries match nearly everything, so they skip fuzzy ranking.
const MIN_FUZZY_QUERY_LEN: usize = 2;

/// Ranks picker candidates against `query`, best match first, keeping at most `max_results`.
/// Without a usable query every candidate is returned in its incoming order.
pub fn rank_candidates(
    candidates: Vec<String>,
    query: &str,
    max_results: usize,
    max_threads: usize,
) -> Vec<String> {
    let query = query.trim();
    if query.len() < MIN_FUZZY_QUERY_LEN || candidates.is_empty() {
        return candidates;
    }

    let max_threads = max_threads.max(1); // Ensure at least 1 to avoid division by zero.
    let time = std::time::Instant::now();

    let options = neo_frizbee::Options {
        prefilter: true,
        max_typos: Some((query.len() as u16 / 4).clamp(2, 6)),
        sort: false,
    };

    let haystack: Vec<&str> = candidates.iter().map(String::as_str).collect();
    let mut matches = neo_frizbee::match_list_parallel(query, &haystack, options, max_threads);

    matches.sort_unstable_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.index_in_haystack.cmp(&b.index_in_haystack))
    });
    matches.truncate(max_results);

    debug!(
        "Ranked {} of {} candidates for '{}' in {:?}",
        matches.len(),
        candidates.len(),
        query,
        time.elapsed()
    );

    matches
        .into_iter()
        .map(|m| candidates[m.index_in_haystack as usize].clone())
        .collect()
}
