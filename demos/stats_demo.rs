use backshift::ProbingHashTable;
use backshift::TableFull;
use clap::Parser;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "capacity", default_value_t = 1000)]
    capacity: usize,

    /// Fraction of slots to fill before churning, between 0 and 1.
    #[arg(short = 'l', long = "load", default_value_t = 0.9)]
    load: f64,

    /// Number of remove-then-insert rounds run after the initial fill.
    #[arg(short = 'r', long = "churn", default_value_t = 10_000)]
    churn: usize,

    #[arg(short = 's', long = "seed", default_value_t = 0)]
    seed: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut table: ProbingHashTable<u64, u64, _> = ProbingHashTable::with_capacity(args.capacity);
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let target = ((args.capacity as f64) * args.load.clamp(0.0, 1.0)) as usize;
    println!(
        "Filling table of {} slots to {} entries",
        table.capacity(),
        target
    );

    let mut live = Vec::with_capacity(target);
    let mut next_key = 0u64;
    while live.len() < target {
        match table.put(next_key, next_key) {
            Ok(_) => live.push(next_key),
            Err(TableFull { capacity }) => {
                println!("Table filled up at {} slots", capacity);
                break;
            }
        }
        next_key += 1;
    }

    table.debug_stats().print();
    table.print_probe_histogram();

    if live.is_empty() {
        return;
    }

    println!("Churning {} remove/insert rounds...", args.churn);
    let mut failures = 0usize;
    for _ in 0..args.churn {
        let victim = rng.random_range(0..live.len());
        let key = live.swap_remove(victim);
        assert!(table.remove(&key), "live key {key} missing");

        match table.put(next_key, next_key) {
            Ok(_) => live.push(next_key),
            Err(_) => failures += 1,
        }
        next_key += 1;
    }

    for key in &live {
        assert_eq!(table.get(key), Some(key));
    }

    table.debug_stats().print();
    table.print_probe_histogram();
    println!("Failed insertions during churn: {}", failures);
}
