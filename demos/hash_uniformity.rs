use hllsketch::common::RandomStrings;
use hllsketch::hash::Murmur3;
use hllsketch::hash::UniformityReport;

fn main() {
    let engine = Murmur3::default();

    println!("Sample hashes (seed {}):", engine.seed());
    for item in ["apple", "banana", "cherry", "apple", ""] {
        println!("  {:>8} -> 0x{:08x}", format!("{item:?}"), engine.hash(item.as_bytes()));
    }

    let batch_size = 100_000;
    let num_buckets = 1000;
    println!("\nHashing {batch_size} random strings into {num_buckets} buckets...");

    let items: Vec<String> = RandomStrings::seeded(12345).take(batch_size).collect();
    let report = UniformityReport::analyze(&items, engine.seed(), num_buckets);

    println!("{report}");
    println!(
        "(uniform reference: cv ~ {:.2}%, chi-square ~ {})",
        100.0 / report.expected().sqrt(),
        num_buckets - 1
    );
}
