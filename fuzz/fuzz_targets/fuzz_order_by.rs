#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use relq_core::{Direction, KeySelector, Query, SortSpec};

#[derive(Arbitrary, Debug, Clone, PartialEq)]
struct Row {
    a: u8,
    b: i16,
    c: bool,
}

#[derive(Arbitrary, Debug)]
struct Input {
    rows: Vec<Row>,
    directions: Vec<bool>,
}

fn key(i: usize) -> KeySelector<(Row, usize)> {
    match i % 3 {
        0 => KeySelector::new(|r: &(Row, usize)| r.0.a),
        1 => KeySelector::new(|r: &(Row, usize)| r.0.b),
        _ => KeySelector::new(|r: &(Row, usize)| r.0.c),
    }
}

fuzz_target!(|input: Input| {
    let rows: Vec<(Row, usize)> = input.rows.into_iter().take(512).zip(0..).collect();
    let directions: Vec<Direction> = input
        .directions
        .iter()
        .take(6)
        .map(|d| if *d { Direction::Descending } else { Direction::Ascending })
        .collect();
    let keys: Vec<_> = (0..directions.len()).map(key).collect();

    let Ok(spec) = SortSpec::from_parts(keys, directions) else {
        return;
    };

    let sorted = Query::from_source(rows.clone()).order_by(spec.clone()).to_vec();
    assert_eq!(sorted.len(), rows.len());

    // Sorted, and stable: equal keys keep their input positions in order
    for w in sorted.windows(2) {
        let ordering = spec.compare(&w[0], &w[1]);
        assert!(ordering.is_le());
        if ordering.is_eq() {
            assert!(w[0].1 < w[1].1);
        }
    }

    // Idempotent
    let again = Query::from_source(sorted.clone()).order_by(spec).to_vec();
    assert_eq!(again, sorted);
});
