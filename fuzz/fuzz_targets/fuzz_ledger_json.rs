#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(ledger) = cutover::Ledger::from_json(content) {
            let next = ledger.compute_next(cutover::RevisionRecord::new("fuzz", "v", "t", "d"));
            assert_eq!(next.iter().filter(|r| r.active).count(), 1);
        }
    }
});
