#![no_main]

use libfuzzer_sys::fuzz_target;

use seqfan_core::{SequenceIter, SequenceKind};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let kind = match data[0] % 4 {
        0 => SequenceKind::Sum,
        1 => SequenceKind::Product,
        2 => SequenceKind::PowerOfTwo,
        _ => SequenceKind::Fibonacci,
    };
    // Cap the count for speed
    let count = u64::from(u16::from_le_bytes([data[1], data[2]])) % 10_000;

    let terms: Vec<(u64, u64)> = SequenceIter::new(kind, count).collect();

    // Exactly count terms, contiguous indices, recurrence holds
    assert_eq!(terms.len() as u64, count);
    for (offset, &(index, _)) in terms.iter().enumerate() {
        assert_eq!(index, kind.first_index() + offset as u64);
    }
    for window in terms.windows(2) {
        let (i, prev) = window[0];
        let (_, next) = window[1];
        let expected = match kind {
            SequenceKind::Sum => prev.wrapping_add(i + 1),
            SequenceKind::Product => prev.wrapping_mul(i + 1),
            SequenceKind::PowerOfTwo => prev.wrapping_mul(2),
            SequenceKind::Fibonacci => continue,
        };
        assert_eq!(next, expected);
    }
    if kind == SequenceKind::Fibonacci {
        for window in terms.windows(3) {
            assert_eq!(window[2].1, window[0].1.wrapping_add(window[1].1));
        }
    }
});
