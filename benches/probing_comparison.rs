use core::hash::Hash;
use core::hash::Hasher;
use core::hint::black_box;

use backshift::ProbingHashTable;
use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::hash_table::Entry as HashbrownEntry;
use hashbrown::hash_table::HashTable as HashbrownHashTable;
use rand::Rng;
use rand::SeedableRng;
use rand::TryRngCore;
use rand::rngs::OsRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand_distr::Zipf;
use siphasher::sip::SipHasher;

trait BenchKey: Clone + Eq {
    fn new(key: u64) -> Self;

    fn hash_key(&self) -> u64;
}

#[derive(Clone, PartialEq, Eq)]
struct SmallKey(u64);

impl BenchKey for SmallKey {
    fn new(key: u64) -> Self {
        black_box(Self(key))
    }

    fn hash_key(&self) -> u64 {
        let mut hasher = SipHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
struct StringKey(String);

impl BenchKey for StringKey {
    fn new(key: u64) -> Self {
        black_box(Self(format!("key_{:016X}", key)))
    }

    fn hash_key(&self) -> u64 {
        let mut hasher = SipHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

const SIZES: &[usize] = &[(1 << 10), (1 << 12), (1 << 14), (1 << 16)];

/// Fraction of slots filled in the fixed-capacity table.
const LOAD: f64 = 0.75;

type Table<K> = ProbingHashTable<K, u64, fn(&K) -> u64>;

fn new_table<K: BenchKey>(capacity: usize) -> Table<K> {
    ProbingHashTable::with_capacity_and_hasher(capacity, K::hash_key as fn(&K) -> u64)
}

fn filled(size: usize) -> usize {
    (size as f64 * LOAD) as usize
}

fn random_keys<K: BenchKey>(count: usize) -> Vec<K> {
    let mut rng = OsRng;
    (0..count)
        .map(|_| K::new(rng.try_next_u64().unwrap()))
        .collect()
}

fn bench_insert_random<K: BenchKey>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("insert_random_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let count = filled(size);
        let keys = random_keys::<K>(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("backshift/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut table = new_table::<K>(size);
                    for (value, key) in keys.into_iter().enumerate() {
                        black_box(table.put(key, value as u64).unwrap());
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut table = HashbrownHashTable::with_capacity(size);
                    for (value, key) in keys.into_iter().enumerate() {
                        let hash = key.hash_key();
                        match table.entry(hash, |(k, _): &(K, u64)| *k == key, |(k, _)| k.hash_key())
                        {
                            HashbrownEntry::Vacant(entry) => {
                                black_box(entry.insert((key, value as u64)));
                            }
                            HashbrownEntry::Occupied(_) => unreachable!(),
                        }
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_find_hit_miss<K: BenchKey>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("find_hit_miss_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let count = filled(size);
        let present = (0..count as u64).map(K::new).collect::<Vec<_>>();
        let mut lookups = (0..count as u64 * 2).map(K::new).collect::<Vec<_>>();
        lookups.shuffle(&mut SmallRng::from_os_rng());

        let mut table = new_table::<K>(size);
        let mut reference = HashbrownHashTable::with_capacity(size);
        for (value, key) in present.iter().enumerate() {
            table.put(key.clone(), value as u64).unwrap();
            reference.insert_unique(key.hash_key(), (key.clone(), value as u64), |(k, _)| {
                k.hash_key()
            });
        }

        group.throughput(Throughput::Elements(lookups.len() as u64));
        group.bench_function(format!("backshift/{size}"), |b| {
            b.iter(|| {
                for key in &lookups {
                    black_box(table.get(key));
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for key in &lookups {
                    black_box(reference.find(key.hash_key(), |(k, _)| k == key));
                }
            })
        });
    }

    group.finish();
}

fn bench_remove<K: BenchKey>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("remove_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let count = filled(size);
        let keys = (0..count as u64).map(K::new).collect::<Vec<_>>();

        let mut table = new_table::<K>(size);
        let mut reference = HashbrownHashTable::with_capacity(size);
        for (value, key) in keys.iter().enumerate() {
            table.put(key.clone(), value as u64).unwrap();
            reference.insert_unique(key.hash_key(), (key.clone(), value as u64), |(k, _)| {
                k.hash_key()
            });
        }

        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("backshift/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut order = keys.clone();
                    order.shuffle(&mut SmallRng::from_os_rng());
                    (table.clone(), order)
                },
                |(mut table, order)| {
                    for key in &order {
                        black_box(table.remove(key));
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || {
                    let mut order = keys.clone();
                    order.shuffle(&mut SmallRng::from_os_rng());
                    (reference.clone(), order)
                },
                |(mut reference, order)| {
                    for key in &order {
                        let removed = reference
                            .find_entry(key.hash_key(), |(k, _)| k == key)
                            .ok()
                            .map(|entry| entry.remove().0);
                        black_box(removed);
                    }
                    black_box(reference)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

#[derive(Clone, Copy)]
enum Operation {
    Find,
    Insert,
    Remove,
}

fn bench_mixed_probabilistic_zipf<K: BenchKey>(c: &mut Criterion) {
    for exponent in [1.0, 1.3] {
        let mut group = c.benchmark_group(format!(
            "mixed_probabilistic_zipf_{:.01}_{}",
            exponent,
            core::any::type_name::<K>()
        ));
        group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

        for &size in SIZES {
            let mut rng = SmallRng::from_os_rng();
            let op_distr = Zipf::new(3.0, exponent).unwrap();
            let operations = (0..size * 3)
                .map(|_| {
                    let op_choice: f64 = rng.sample(op_distr);
                    if op_choice <= 1.0 {
                        Operation::Find
                    } else if op_choice <= 2.0 {
                        Operation::Insert
                    } else {
                        Operation::Remove
                    }
                })
                .collect::<Vec<Operation>>();

            let key_distr = Zipf::new(filled(size) as f64, 1.0).unwrap();

            group.throughput(Throughput::Elements(operations.len() as u64));
            group.bench_function(format!("backshift/{size}"), |b| {
                b.iter_batched(
                    || {
                        let mut operations = operations.clone();
                        operations.shuffle(&mut SmallRng::from_os_rng());
                        operations
                    },
                    |operations| {
                        let mut table = new_table::<K>(size);
                        for operation in operations {
                            let key = K::new(rng.sample(key_distr) as u64);
                            match operation {
                                Operation::Insert => {
                                    black_box(table.insert(key, 0).ok());
                                }
                                Operation::Remove => {
                                    black_box(table.remove(&key));
                                }
                                Operation::Find => {
                                    black_box(table.get(&key));
                                }
                            }
                        }
                        black_box(table)
                    },
                    BatchSize::SmallInput,
                )
            });
        }

        group.finish();
    }
}

fn bench_churn<K: BenchKey>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("churn_{}", core::any::type_name::<K>()));
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let count = filled(size);
        let keys = (0..count as u64).map(K::new).collect::<Vec<_>>();

        let mut table = new_table::<K>(size);
        let mut reference = HashbrownHashTable::with_capacity(size);
        for key in &keys {
            table.put(key.clone(), 0).unwrap();
            reference.insert_unique(key.hash_key(), (key.clone(), 0u64), |(k, _)| k.hash_key());
        }

        let fresh = (count as u64..count as u64 * 2)
            .map(K::new)
            .collect::<Vec<_>>();

        group.throughput(Throughput::Elements(count as u64 * 2));
        group.bench_function(format!("backshift/{size}"), |b| {
            b.iter_batched(
                || table.clone(),
                |mut table| {
                    for (old, new) in keys.iter().zip(fresh.iter()) {
                        black_box(table.remove(old));
                        black_box(table.put(new.clone(), 1).unwrap());
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || reference.clone(),
                |mut reference| {
                    for (old, new) in keys.iter().zip(fresh.iter()) {
                        let removed = reference
                            .find_entry(old.hash_key(), |(k, _)| k == old)
                            .ok()
                            .map(|entry| entry.remove().0);
                        black_box(removed);
                        black_box(reference.insert_unique(
                            new.hash_key(),
                            (new.clone(), 1u64),
                            |(k, _)| k.hash_key(),
                        ));
                    }
                    black_box(reference)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_random::<SmallKey>,
    bench_insert_random::<StringKey>,
    bench_find_hit_miss::<SmallKey>,
    bench_find_hit_miss::<StringKey>,
    bench_remove::<SmallKey>,
    bench_remove::<StringKey>,
    bench_mixed_probabilistic_zipf::<SmallKey>,
    bench_mixed_probabilistic_zipf::<StringKey>,
    bench_churn::<SmallKey>,
    bench_churn::<StringKey>,
);

criterion_main!(benches);
