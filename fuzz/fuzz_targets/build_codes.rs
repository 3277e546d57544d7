#![no_main]
use huffcode::{HuffmanCode, ProbabilityTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|counts: Vec<u16>| {
    let table = match ProbabilityTable::from_counts(
        counts.iter().enumerate().map(|(s, &c)| (s, c as u64)),
    ) {
        Ok(table) => table,
        Err(_) => return,
    };

    let code = match HuffmanCode::new(&table) {
        Ok(code) => code,
        Err(_) => {
            assert!(table.is_empty());
            return;
        }
    };

    let codes = code.codes();
    assert_eq!(codes.len(), table.len());
    assert!(codes.is_prefix_free());
    assert!(codes.kraft_sum() <= 1.0 + 1e-9);
    assert!(code.metrics().redundancy >= -1e-9);
});
