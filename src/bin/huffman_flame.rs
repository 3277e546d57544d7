use huffcode::{HuffmanCode, ProbabilityTable};

fn main() {
    // Zipf-like counts over a large alphabet.
    let counts = (0u32..4096).map(|s| (s, 1_000_000 / (s as u64 + 1)));
    let table = match ProbabilityTable::from_counts(counts) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("huffman_flame: {e}");
            std::process::exit(1);
        }
    };

    for _ in 0..200 {
        match HuffmanCode::new(&table) {
            Ok(code) => {
                std::hint::black_box(code);
            }
            Err(e) => {
                eprintln!("huffman_flame: {e}");
                std::process::exit(1);
            }
        }
    }
}
