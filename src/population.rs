//! # Population
//!
//! A population is a plain `Vec<Chromosome>`. Each generation is built from
//! scratch (elites and parents are cloned, never moved or mutated in place), so
//! no two generations share a selection.
//!
//! This module seeds the first generation and evaluates and ranks a generation.
//! Breeding the next one is the job of a [`BreedStrategy`](crate::strategy::BreedStrategy).

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::chromosome::Chromosome;
use crate::component::Component;
use crate::constraints::CircuitConstraints;
use crate::rng::RandomSource;

pub type Population<'a> = Vec<Chromosome<'a>>;

/// Builds the first generation.
///
/// Each chromosome scans its own shuffled copy of the catalog once and takes an
/// item only if the running cost and size stay within the budget and board area
/// and a draw with `inclusion_probability` succeeds. The cap checks come first;
/// no draw is made for an item that would not fit.
///
/// The efficiency floor is not enforced here, so some chromosomes may start out
/// infeasible. An empty catalog yields `size` empty chromosomes.
pub fn initialize<'a, R: RandomSource>(
    catalog: &'a [Component],
    size: usize,
    constraints: CircuitConstraints,
    inclusion_probability: f64,
    rng: &mut R,
) -> Population<'a> {
    (0..size)
        .map(|_| {
            let mut order: Vec<&'a Component> = catalog.iter().collect();
            rng.shuffle(&mut order);

            let mut chromosome = Chromosome::new(constraints);
            let mut running_cost = 0.0;
            let mut running_size = 0.0;

            for &component in &order {
                if running_cost + component.cost() <= constraints.budget
                    && running_size + component.size() <= constraints.area
                    && rng.chance(inclusion_probability)
                {
                    chromosome.add(component);
                    running_cost += component.cost();
                    running_size += component.size();
                }
            }

            chromosome
        })
        .collect()
}

/// Computes and caches the fitness of every chromosome.
///
/// Populations of at least `parallel_threshold` chromosomes are evaluated on
/// the rayon pool. Fitness is a pure function of the selection, so both paths
/// produce identical caches.
pub fn evaluate(population: &mut [Chromosome<'_>], parallel_threshold: usize) {
    if population.len() >= parallel_threshold {
        population.par_iter_mut().for_each(|chromosome| {
            chromosome.fitness();
        });
    } else {
        population.iter_mut().for_each(|chromosome| {
            chromosome.fitness();
        });
    }
}

/// Orders `a` before `b` when `a` is fitter. NaN sorts last.
pub(crate) fn by_descending_fitness(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or_else(|| {
        if a.is_nan() && b.is_nan() {
            Ordering::Equal
        } else if a.is_nan() {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    })
}

/// Sorts the population by descending fitness.
///
/// The sort is stable: equally fit chromosomes keep their relative order.
/// Chromosomes should be evaluated first; otherwise each comparison recomputes
/// the score.
pub fn sort_by_fitness(population: &mut [Chromosome<'_>]) {
    population.sort_by(|a, b| by_descending_fitness(a.score(), b.score()));
}
