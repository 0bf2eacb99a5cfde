#![no_main]

use libfuzzer_sys::fuzz_target;

use seqfan_core::SequenceKind;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing never panics; accepted inputs round-trip through the tag
    if let Ok(kind) = input.parse::<SequenceKind>() {
        assert_eq!(kind.tag(), input);
        assert_eq!(kind.tag().parse::<SequenceKind>(), Ok(kind));
    }
});
