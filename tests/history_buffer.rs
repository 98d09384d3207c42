// tests/history_buffer.rs

use proptest::prelude::*;

use gitdemo::config::DEFAULT_COMMAND_HISTORY;
use gitdemo::exec::ExecutionResult;
use gitdemo::history::HistoryBuffer;

fn entry(i: usize) -> ExecutionResult {
    ExecutionResult::new(format!("cmd-{i}"), format!("out-{i}"))
}

#[test]
fn thirteen_appends_evict_only_the_first() {
    let mut history = HistoryBuffer::new(DEFAULT_COMMAND_HISTORY);
    for i in 1..=13 {
        history.append(entry(i));
    }

    let snapshot = history.snapshot();
    assert_eq!(snapshot.len(), 12);
    assert!(!snapshot.contains(&entry(1)));
    let expected: Vec<_> = (2..=13).map(entry).collect();
    assert_eq!(snapshot, expected);
}

#[test]
fn snapshot_does_not_mutate() {
    let mut history = HistoryBuffer::new(3);
    history.append(entry(1));
    let first = history.snapshot();
    let second = history.snapshot();
    assert_eq!(first, second);
    assert_eq!(history.len(), 1);
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    let mut history = HistoryBuffer::new(0);
    history.append(entry(1));
    history.append(entry(2));
    assert_eq!(history.capacity(), 1);
    assert_eq!(history.snapshot(), vec![entry(2)]);
}

proptest! {
    #[test]
    fn keeps_most_recent_entries_in_insertion_order(
        capacity in 1usize..20,
        appends in 0usize..60,
    ) {
        let mut history = HistoryBuffer::new(capacity);
        for i in 0..appends {
            history.append(entry(i));
        }

        let snapshot = history.snapshot();
        let kept = appends.min(capacity);
        prop_assert_eq!(snapshot.len(), kept);

        let expected: Vec<_> = (appends - kept..appends).map(entry).collect();
        prop_assert_eq!(snapshot, expected);
    }
}
