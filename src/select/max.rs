//! Max-by-score selection
//!
//! Scans a sequence once and keeps the item with the highest score.
//! Ties keep the earliest item, so the result is deterministic for any
//! ordered input.

use std::convert::Infallible;

/// Select the item with the highest score.
///
/// Returns `None` for an empty sequence. `score` is called exactly once per
/// item, in sequence order. A later item replaces the current best only when
/// its score is strictly greater.
pub fn select_max<I, S, F>(items: I, mut score: F) -> Option<I::Item>
where
    I: IntoIterator,
    S: PartialOrd,
    F: FnMut(&I::Item) -> S,
{
    match try_select_max(items, |item| Ok::<S, Infallible>(score(item))) {
        Ok(best) => best,
        Err(never) => match never {},
    }
}

/// Select the item with the highest score, where scoring may fail.
///
/// The first scoring error is returned as-is and no further items are
/// scored.
pub fn try_select_max<I, S, E, F>(items: I, mut score: F) -> Result<Option<I::Item>, E>
where
    I: IntoIterator,
    S: PartialOrd,
    F: FnMut(&I::Item) -> Result<S, E>,
{
    let mut iter = items.into_iter();

    let Some(first) = iter.next() else {
        return Ok(None);
    };
    let mut best_score = score(&first)?;
    let mut best = first;

    for item in iter {
        let current = score(&item)?;
        if current > best_score {
            best_score = current;
            best = item;
        }
    }

    Ok(Some(best))
}
