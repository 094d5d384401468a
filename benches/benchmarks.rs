criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        converting_flop_isomorphism,
        converting_flop_sorted_isomorphism,
        extending_turn_card,
        exhausting_flop_isomorphisms,
        enumerating_canonical_flops,
        hitting_flop_cache,
        warming_flop_cache,
}

fn converting_flop_isomorphism(c: &mut criterion::Criterion) {
    let flop = Flop::random();
    c.bench_function("convert a Flop to Isomorphism", |b| {
        b.iter(|| Isomorphism::canonicalize(&flop))
    });
}

fn converting_flop_sorted_isomorphism(c: &mut criterion::Criterion) {
    let flop = Flop::random();
    c.bench_function("convert a Flop to order-free Isomorphism", |b| {
        b.iter(|| Isomorphism::sorted(&flop))
    });
}

fn extending_turn_card(c: &mut criterion::Criterion) {
    let mut deck = Deck::new();
    let flop = deck.flop();
    let turn = deck.draw().expect("49 cards left");
    let permutation = Permutation::from(&flop);
    c.bench_function("extend a Flop Permutation to the Turn", |b| {
        b.iter(|| permutation.extend(&turn))
    });
}

fn exhausting_flop_isomorphisms(c: &mut criterion::Criterion) {
    c.bench_function("exhaust all Flop Isomorphisms", |b| {
        b.iter(|| {
            Flop::exhaust()
                .map(|flop| Isomorphism::canonicalize(&flop))
                .count()
        })
    });
}

fn enumerating_canonical_flops(c: &mut criterion::Criterion) {
    c.bench_function("enumerate all 1,755 canonical Flops", |b| {
        b.iter(|| Isomorphism::enumerate())
    });
}

fn hitting_flop_cache(c: &mut criterion::Criterion) {
    let cache = Cache::new();
    let flop = Flop::random();
    cache.canonicalize(&flop);
    c.bench_function("look up a cached Flop Isomorphism", |b| {
        b.iter(|| cache.canonicalize(&flop))
    });
}

fn warming_flop_cache(c: &mut criterion::Criterion) {
    c.bench_function("warm a Flop cache", |b| {
        b.iter(|| {
            let cache = Cache::new();
            cache.warm();
            cache.len()
        })
    });
}

use isoflop::Arbitrary;
use isoflop::cache::Cache;
use isoflop::cards::deck::Deck;
use isoflop::cards::flop::Flop;
use isoflop::cards::isomorphism::Isomorphism;
use isoflop::cards::permutation::Permutation;
