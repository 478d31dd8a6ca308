use std::collections::HashSet;

use hllsketch::common::RandomStrings;
use hllsketch::hll::HllSketch;

fn main() {
    const STREAM_SIZE: usize = 1_000_000;
    const B: u8 = 14;

    let mut sketch = HllSketch::new(B, 42).unwrap();
    println!(
        "HyperLogLog with B = {} ({} registers, {} bytes)",
        B,
        sketch.m(),
        sketch.m()
    );
    println!(
        "Theoretical relative error: 1.04/sqrt(m) = {:.3}%",
        104.0 / (sketch.m() as f64).sqrt()
    );

    let mut stream = RandomStrings::seeded(42);
    let mut seen = HashSet::new();

    println!(
        "\n{:>10} {:>10} {:>10} {:>8}",
        "processed", "exact", "estimate", "error"
    );
    let checkpoint = STREAM_SIZE / 10;
    for processed in 1..=STREAM_SIZE {
        let item = stream.next_string();
        sketch.add(&item);
        seen.insert(item);

        if processed % checkpoint == 0 {
            let exact = seen.len() as u64;
            let estimate = sketch.estimate();
            let error = (estimate as f64 - exact as f64).abs() / exact as f64;
            println!(
                "{:>10} {:>10} {:>10} {:>7.3}%",
                processed,
                exact,
                estimate,
                error * 100.0
            );
        }
    }
}
