use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use std::sync::{Arc, Barrier};

use autolot_accounts::Buyer;
use autolot_core::{BuyerId, IdSequence, ItemId};
use autolot_inventory::Item;
use autolot_market::Marketplace;

fn seeded_market(item_count: usize, price: i64) -> (Arc<Marketplace>, Vec<ItemId>) {
    let ids: IdSequence<ItemId> = IdSequence::new();
    let market = Arc::new(Marketplace::new());
    let item_ids = (0..item_count)
        .map(|i| {
            let item = Item::new(&ids, "Make", format!("Model {i}"), price).unwrap();
            let id = item.id();
            market.inventory().add(item).unwrap();
            id
        })
        .collect();
    (market, item_ids)
}

fn seeded_buyers(count: usize, balance: i64) -> Vec<Arc<Buyer>> {
    let ids: IdSequence<BuyerId> = IdSequence::new();
    (0..count)
        .map(|i| Arc::new(Buyer::new(&ids, format!("Buyer {i}"), balance).unwrap()))
        .collect()
}

fn bench_purchase_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("purchase_latency");
    group.sample_size(1000);

    // Full path, no contention: reserve + debit + record.
    group.bench_function("uncontended_success", |b| {
        b.iter(|| {
            let (market, item_ids) = seeded_market(1, 500_000);
            let buyers = seeded_buyers(1, 3_500_000);
            black_box(market.purchase(black_box(item_ids[0]), &buyers[0]).unwrap());
        });
    });

    // Fast-fail path: stale selector against a sold-out market.
    group.bench_function("stale_selector_rejection", |b| {
        let (market, item_ids) = seeded_market(1, 500_000);
        let buyers = seeded_buyers(1, 3_500_000);
        market.purchase(item_ids[0], &buyers[0]).unwrap();

        b.iter(|| {
            black_box(market.purchase(black_box(item_ids[0]), &buyers[0]).unwrap_err());
        });
    });

    group.finish();
}

fn bench_contended_purchases(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_purchases");

    for thread_count in [2, 4, 8].iter() {
        group.throughput(Throughput::Elements(*thread_count as u64));
        group.bench_with_input(
            BenchmarkId::new("distinct_items", thread_count),
            thread_count,
            |b, &threads| {
                b.iter(|| {
                    let (market, item_ids) = seeded_market(threads, 500_000);
                    let racers = seeded_buyers(threads, 3_500_000);
                    let barrier = Arc::new(Barrier::new(threads));

                    let handles: Vec<_> = racers
                        .iter()
                        .zip(item_ids)
                        .map(|(buyer, item_id)| {
                            let market = Arc::clone(&market);
                            let buyer = Arc::clone(buyer);
                            let barrier = Arc::clone(&barrier);
                            std::thread::spawn(move || {
                                barrier.wait();
                                market.purchase(item_id, &buyer).is_ok()
                            })
                        })
                        .collect();

                    let sold = handles
                        .into_iter()
                        .map(|h| h.join().unwrap())
                        .filter(|&ok| ok)
                        .count();
                    assert_eq!(sold, threads);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("same_item", thread_count),
            thread_count,
            |b, &threads| {
                b.iter(|| {
                    let (market, item_ids) = seeded_market(1, 500_000);
                    let racers = seeded_buyers(threads, 3_500_000);
                    let barrier = Arc::new(Barrier::new(threads));

                    let handles: Vec<_> = racers
                        .iter()
                        .map(|buyer| {
                            let market = Arc::clone(&market);
                            let buyer = Arc::clone(buyer);
                            let barrier = Arc::clone(&barrier);
                            let target = item_ids[0];
                            std::thread::spawn(move || {
                                barrier.wait();
                                market.purchase(target, &buyer).is_ok()
                            })
                        })
                        .collect();

                    let sold = handles
                        .into_iter()
                        .map(|h| h.join().unwrap())
                        .filter(|&ok| ok)
                        .count();
                    assert_eq!(sold, 1);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_purchase_latency, bench_contended_purchases);
criterion_main!(benches);
