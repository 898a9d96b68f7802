use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use circuit_ga::{
    catalog::sample_components,
    constraints::CircuitConstraints,
    evolution::EvolutionOptions,
    population::{evaluate, initialize, sort_by_fitness},
    rng::RandomNumberGenerator,
    strategy::{crossover, BreedStrategy, CombinatorialBreedStrategy},
};

fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");
    let catalog = sample_components();
    let strategy = CombinatorialBreedStrategy::default();
    let mut rng = RandomNumberGenerator::from_seed(7);

    for size in [50, 200, 1000].iter() {
        let options = EvolutionOptions::builder().population_size(*size).build();
        let mut parents = initialize(&catalog, *size, CircuitConstraints::default(), 0.7, &mut rng);
        evaluate(&mut parents, usize::MAX);
        sort_by_fitness(&mut parents);

        group.bench_with_input(BenchmarkId::from_parameter(size), &parents, |b, parents| {
            b.iter(|| {
                strategy
                    .breed(black_box(parents), &catalog, &options, &mut rng)
                    .map(|next| next.len())
            })
        });
    }

    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let catalog = sample_components();
    let mut rng = RandomNumberGenerator::from_seed(11);
    let parents = initialize(&catalog, 2, CircuitConstraints::default(), 0.7, &mut rng);

    c.bench_function("crossover", |b| {
        b.iter(|| crossover(black_box(&parents[0]), black_box(&parents[1]), &mut rng))
    });
}

criterion_group!(benches, bench_next_generation, bench_crossover);
criterion_main!(benches);
