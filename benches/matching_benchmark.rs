// ============================================================================
// Simple Cross Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Full Matching - Incoming order sweeping resting levels
// 2. Resting - Order submission that never crosses
// 3. Cancel - Removing orders from deep queues
// 4. Print - Book snapshot across symbols
// 5. Text Path - Parse and render through the exchange facade
// ============================================================================

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use simple_cross::prelude::*;
use std::hint::black_box;

fn order(id: u32, symbol: Symbol, side: Side, quantity: u16, price: Price) -> Order {
    Order::new(OrderId::new(id), symbol, side, quantity, price)
}

fn price(integral: i64) -> Price {
    Price::from_integer(integral).unwrap()
}

/// Router with `levels` ask levels starting at 50000, `depth` orders each
fn populated_router(levels: u32, depth: u32) -> SymbolRouter {
    let mut router = RouterBuilder::new().build().unwrap();
    let symbol: Symbol = "BTC".parse().unwrap();

    let mut id = 1;
    for level in 0..levels {
        for _ in 0..depth {
            router.place(order(id, symbol, Side::Sell, 1, price(50000 + level as i64)));
            id += 1;
        }
    }
    router
}

// ============================================================================
// Matching Benchmarks
// ============================================================================

fn benchmark_price_time_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_time_matching");
    let symbol: Symbol = "BTC".parse().unwrap();

    for sweep in [1u16, 10, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(sweep), sweep, |b, &sweep| {
            b.iter_batched(
                || populated_router(100, 10),
                |mut router| {
                    // Buy that crosses the first `sweep` resting orders
                    black_box(router.place(order(
                        u32::MAX,
                        symbol,
                        Side::Buy,
                        sweep,
                        price(50099),
                    )))
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_order_submission_no_match(c: &mut Criterion) {
    c.bench_function("order_submission_no_match", |b| {
        let mut router = RouterBuilder::new().build().unwrap();
        let symbol: Symbol = "BTC".parse().unwrap();
        let mut id = 0u32;

        b.iter(|| {
            // Bids below every ask never cross
            id = id.wrapping_add(1);
            black_box(router.place(order(id, symbol, Side::Buy, 1, price(40000 + (id % 100) as i64))));
        });
    });
}

fn benchmark_cancel(c: &mut Criterion) {
    c.bench_function("cancel_mid_queue", |b| {
        b.iter_batched(
            || populated_router(10, 100),
            |mut router| black_box(router.cancel(OrderId::new(550))),
            BatchSize::SmallInput,
        );
    });
}

fn benchmark_print(c: &mut Criterion) {
    c.bench_function("print_multi_symbol", |b| {
        let mut router = RouterBuilder::new().build().unwrap();
        let symbols: Vec<Symbol> = ["AAPL", "IBM", "MSFT", "TSLA"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        // 100 levels on each side of every book
        let mut id = 1;
        for symbol in &symbols {
            for i in 0..100 {
                router.place(order(id, *symbol, Side::Buy, 1, price(49900 - i * 10)));
                router.place(order(id + 1, *symbol, Side::Sell, 1, price(50100 + i * 10)));
                id += 2;
            }
        }

        b.iter(|| black_box(router.print()));
    });
}

fn benchmark_text_actions(c: &mut Criterion) {
    c.bench_function("exchange_action_roundtrip", |b| {
        b.iter_batched(
            Exchange::new,
            |mut exchange| {
                let mut rendered = Vec::new();
                for line in [
                    "O 10000 IBM B 10 100.00000",
                    "O 10001 IBM B 10 99.00000",
                    "O 10002 IBM S 5 101.00000",
                    "O 10003 IBM S 15 99.00000",
                    "X 10002",
                    "P",
                ] {
                    rendered.extend(exchange.action(line).iter().map(ToString::to_string));
                }
                black_box(rendered)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    benchmark_price_time_matching,
    benchmark_order_submission_no_match,
    benchmark_cancel,
    benchmark_print,
    benchmark_text_actions,
);
criterion_main!(benches);
