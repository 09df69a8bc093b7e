//! Time window and ordering.
//!
//! Discards past-due entries, orders the remainder chronologically, and
//! cuts the list down to one page. Entries sharing a display time keep
//! their input order: the sort is stable and no secondary key exists, so
//! identical inputs always produce identical output.

use crate::domain::BoardTime;

/// Filter, order and truncate board entries.
///
/// An entry at exactly `now` is kept; a train at the current minute is
/// still upcoming.
pub fn upcoming<T>(
    entries: Vec<(BoardTime, T)>,
    now: BoardTime,
    page_size: usize,
) -> Vec<(BoardTime, T)> {
    let mut entries: Vec<(BoardTime, T)> = entries
        .into_iter()
        .filter(|(time, _)| *time >= now)
        .collect();
    entries.sort_by_key(|(time, _)| *time);
    entries.truncate(page_size);
    entries
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_time() -> impl Strategy<Value = BoardTime> {
        (0u32..24, 0u32..60).prop_map(|(h, m)| BoardTime::from_hm(h, m).unwrap())
    }

    proptest! {
        /// No returned entry is earlier than now.
        #[test]
        fn nothing_past_due(
            times in prop::collection::vec(arb_time(), 0..30),
            now in arb_time(),
            page in 0usize..20
        ) {
            let entries: Vec<(BoardTime, usize)> =
                times.into_iter().enumerate().map(|(i, t)| (t, i)).collect();
            for (time, _) in upcoming(entries, now, page) {
                prop_assert!(time >= now);
            }
        }

        /// Output is sorted ascending by display time.
        #[test]
        fn output_is_monotonic(
            times in prop::collection::vec(arb_time(), 0..30),
            now in arb_time(),
            page in 0usize..20
        ) {
            let entries: Vec<(BoardTime, usize)> =
                times.into_iter().enumerate().map(|(i, t)| (t, i)).collect();
            let result = upcoming(entries, now, page);
            for pair in result.windows(2) {
                prop_assert!(pair[0].0 <= pair[1].0);
            }
        }

        /// Never more than a page of results; never fewer than available.
        #[test]
        fn page_bound_holds(
            times in prop::collection::vec(arb_time(), 0..30),
            now in arb_time(),
            page in 0usize..20
        ) {
            let eligible = times.iter().filter(|t| **t >= now).count();
            let entries: Vec<(BoardTime, usize)> =
                times.into_iter().enumerate().map(|(i, t)| (t, i)).collect();
            let result = upcoming(entries, now, page);
            prop_assert_eq!(result.len(), eligible.min(page));
        }

        /// Equal-time entries preserve their input order.
        #[test]
        fn stable_on_ties(
            count in 1usize..20,
            now in arb_time(),
            tie in arb_time()
        ) {
            prop_assume!(tie >= now);
            let entries: Vec<(BoardTime, usize)> = (0..count).map(|i| (tie, i)).collect();
            let result = upcoming(entries, now, count);
            let order: Vec<usize> = result.into_iter().map(|(_, i)| i).collect();
            prop_assert_eq!(order, (0..count).collect::<Vec<_>>());
        }
    }
}
