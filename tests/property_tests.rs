//! Property-based tests for list and formatter invariants.
//!
//! Tests validate:
//! 1. replace_all / append_more ordering
//! 2. move_item round-trips and out-of-range tolerance
//! 3. Sentinel and id-uniqueness invariants under arbitrary operation sequences
//! 4. View-count abbreviation keeps a verbatim prefix of the comma groups

use std::collections::HashSet;

use proptest::prelude::*;
use vidlist::format::format_view_count;
use vidlist::model::{VideoId, VideoRecord};
use vidlist::store::{InMemoryFavorites, VideoListStore};

fn record(id: &str, title: &str) -> VideoRecord {
    VideoRecord::new(
        VideoId::new(id).expect("valid id"),
        title,
        "",
        "0:30",
        "1,000 views",
    )
}

/// Records with unique ids "<prefix><index>" and arbitrary titles.
fn records_strategy(prefix: &'static str) -> impl Strategy<Value = Vec<VideoRecord>> {
    prop::collection::vec("[a-zA-Z ]{0,12}", 0..20).prop_map(move |titles| {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| record(&format!("{prefix}{i}"), title))
            .collect()
    })
}

fn ids(store: &VideoListStore) -> Vec<Option<String>> {
    (0..store.count())
        .map(|pos| store.item_at(pos).map(|r| r.id().to_string()))
        .collect()
}

// ===== Property 1: Ordering =====

proptest! {
    #[test]
    fn replace_all_preserves_count_and_order(records in records_strategy("v")) {
        let mut store = VideoListStore::new(false);
        store.replace_all(records.clone());

        prop_assert_eq!(store.count(), records.len());
        for (i, expected) in records.iter().enumerate() {
            prop_assert_eq!(store.item_at(i), Some(expected));
        }
    }

    #[test]
    fn append_more_is_associative(a in records_strategy("a"), b in records_strategy("b")) {
        let mut stepwise = VideoListStore::new(false);
        stepwise.append_more(a.clone());
        stepwise.append_more(b.clone());

        let mut at_once = VideoListStore::new(false);
        at_once.append_more(a.into_iter().chain(b));

        prop_assert_eq!(ids(&stepwise), ids(&at_once));
    }
}

// ===== Property 2: Positional operations =====

proptest! {
    #[test]
    fn move_then_move_back_restores_order(
        (n, from, to) in (1usize..20).prop_flat_map(|n| (Just(n), 0..n, 0..n))
    ) {
        let records: Vec<_> = (0..n).map(|i| record(&format!("v{i}"), "t")).collect();
        let mut store = VideoListStore::with_records(records, false);
        let before = ids(&store);

        store.move_item(from, to);
        store.move_item(to, from);

        prop_assert_eq!(ids(&store), before);
    }

    #[test]
    fn remove_at_out_of_range_is_noop(records in records_strategy("v"), extra in 0usize..50) {
        let mut store = VideoListStore::with_records(records, false);
        let before = ids(&store);

        let removed = store.remove_at(store.count() + extra);

        prop_assert!(removed.is_none());
        prop_assert_eq!(ids(&store), before);
    }
}

// ===== Property 3: Invariants under operation sequences =====

#[derive(Debug, Clone)]
enum Op {
    Append(usize),
    AddSentinel,
    RemoveSentinel,
    RemoveAt(usize),
    Move(usize, usize),
    Swap(usize, usize),
    Dismiss(usize),
    Undo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..4).prop_map(Op::Append),
        Just(Op::AddSentinel),
        Just(Op::RemoveSentinel),
        (0usize..12).prop_map(Op::RemoveAt),
        (0usize..12, 0usize..12).prop_map(|(a, b)| Op::Move(a, b)),
        (0usize..12, 0usize..12).prop_map(|(a, b)| Op::Swap(a, b)),
        (0usize..12).prop_map(Op::Dismiss),
        Just(Op::Undo),
    ]
}

proptest! {
    #[test]
    fn sentinel_stays_last_and_ids_stay_unique(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut store = VideoListStore::new(false);
        let mut history = InMemoryFavorites::new();
        let mut next_id = 0usize;

        for op in ops {
            match op {
                Op::Append(n) => {
                    let page: Vec<_> = (0..n)
                        .map(|_| {
                            next_id += 1;
                            // Every third id repeats an earlier one to exercise duplicate skipping
                            let id = if next_id % 3 == 0 { next_id / 3 } else { next_id };
                            record(&format!("v{id}"), "t")
                        })
                        .collect();
                    store.append_more(page);
                }
                Op::AddSentinel => {
                    let was_loading = store.is_loading();
                    prop_assert_eq!(store.add_loading_sentinel().is_err(), was_loading);
                }
                Op::RemoveSentinel => {
                    let was_loading = store.is_loading();
                    prop_assert_eq!(store.remove_loading_sentinel().is_ok(), was_loading);
                }
                Op::RemoveAt(pos) => {
                    store.remove_at(pos);
                }
                Op::Move(from, to) => store.move_item(from, to),
                Op::Swap(a, b) => store.swap(a, b),
                Op::Dismiss(pos) => {
                    prop_assert!(store.dismiss(pos, &mut history).is_ok());
                }
                Op::Undo => {
                    prop_assert!(store.undo_dismiss(&mut history).is_ok());
                }
            }

            let rows = ids(&store);
            let sentinels = rows.iter().filter(|row| row.is_none()).count();
            prop_assert!(sentinels <= 1, "more than one sentinel: {:?}", rows);
            if sentinels == 1 {
                prop_assert!(rows.last().is_some_and(Option::is_none), "sentinel not last: {:?}", rows);
            }

            let unique: HashSet<_> = rows.iter().flatten().collect();
            prop_assert_eq!(unique.len(), rows.len() - sentinels, "duplicate ids: {:?}", rows);
        }
    }
}

// ===== Property 4: View-count abbreviation =====

proptest! {
    #[test]
    fn format_keeps_verbatim_leading_groups(
        lead in "[1-9][0-9]{0,2}",
        rest in prop::collection::vec("[0-9]{3}", 0..5),
    ) {
        let groups: Vec<String> = std::iter::once(lead).chain(rest).collect();
        let raw = format!("{} views", groups.join(","));

        let formatted = format_view_count(&raw);

        let (expected_keep, suffix) = match groups.len() {
            1 => (1, ""),
            2 => (1, " K"),
            n => (n - 2, " M"),
        };
        let expected = format!("{}{} views", groups[..expected_keep].join(","), suffix);
        prop_assert_eq!(formatted, expected);
    }

    #[test]
    fn format_never_panics(raw in ".*") {
        let _ = format_view_count(&raw);
    }
}
