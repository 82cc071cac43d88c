use rand::{Rng, seq::SliceRandom};

/// Upper bound on seed tracks accepted by the recommendations endpoint.
pub const MAX_SEEDS: usize = 5;

/// Chooses up to [`MAX_SEEDS`] seed track IDs for a recommendation request.
///
/// When `explicit` holds a non-empty comma-separated list, its first five
/// entries are returned in the given order, untouched and unvalidated.
/// Otherwise a uniformly random permutation of `track_ids` is drawn from
/// `rng` and its first five entries are returned.
///
/// An empty `track_ids` without explicit seeds yields an empty vector.
pub fn select_seeds<R: Rng + ?Sized>(
    track_ids: &[String],
    explicit: Option<&str>,
    rng: &mut R,
) -> Vec<String> {
    if let Some(list) = explicit.filter(|s| !s.is_empty()) {
        return list
            .split(',')
            .take(MAX_SEEDS)
            .map(str::to_string)
            .collect();
    }

    let mut indices: Vec<usize> = (0..track_ids.len()).collect();
    indices.shuffle(rng);

    indices
        .into_iter()
        .take(MAX_SEEDS)
        .map(|idx| track_ids[idx].clone())
        .collect()
}
