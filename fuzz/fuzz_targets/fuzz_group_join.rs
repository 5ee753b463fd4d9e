#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use relq_core::AsQuery;

#[derive(Arbitrary, Debug)]
struct Input {
    left: Vec<(u8, u8)>,
    right: Vec<(u8, u8, u16)>,
}

fuzz_target!(|input: Input| {
    let left: Vec<_> = input.left.into_iter().take(256).collect();
    let right: Vec<_> = input.right.into_iter().take(256).collect();

    let joined = left
        .query()
        .group_join(
            right.query(),
            |l| (l.0, l.1),
            |r| (r.0, r.1),
            |l, group| (*l, group.iter().map(|r| r.2).collect::<Vec<_>>()),
        )
        .to_vec();

    // One result per left element, matching a nested-loop scan
    assert_eq!(joined.len(), left.len());
    for (l, matched) in &joined {
        let expected: Vec<u16> = right
            .iter()
            .filter(|r| (r.0, r.1) == *l)
            .map(|r| r.2)
            .collect();
        assert_eq!(matched, &expected);
    }
});
