//! # Combinatorial Breeding
//!
//! Generational breeding for subset-selection chromosomes: elitism, tournament
//! parents, uniform set crossover and add/remove mutation.

use std::collections::BTreeMap;

use crate::chromosome::Chromosome;
use crate::component::{Component, ComponentId};
use crate::error::{GeneticError, Result};
use crate::evolution::options::EvolutionOptions;
use crate::rng::RandomSource;
use crate::selection::{ElitistSelection, SelectionStrategy, TournamentSelection};
use crate::strategy::BreedStrategy;

/// Probability that a component held by only one parent is passed on to that
/// parent's child.
pub const CARRY_OVER_PROBABILITY: f64 = 0.7;

/// Uniform set crossover.
///
/// The union of both selections is walked in ascending identifier order, which
/// keeps runs reproducible for a given seed. For each component:
///
/// - held by both parents: a fair coin sends it to child A (`true`) or child B,
///   never to both;
/// - held only by `parent1`: goes to child A with probability 0.7, otherwise to
///   neither child;
/// - held only by `parent2`: goes to child B with probability 0.7, otherwise to
///   neither child.
///
/// Children are scored against `parent1`'s constraints.
pub fn crossover<'a, R: RandomSource>(
    parent1: &Chromosome<'a>,
    parent2: &Chromosome<'a>,
    rng: &mut R,
) -> (Chromosome<'a>, Chromosome<'a>) {
    let mut union: BTreeMap<ComponentId, (&'a Component, bool, bool)> = BTreeMap::new();
    for &component in parent1.components() {
        union.insert(component.id(), (component, true, false));
    }
    for &component in parent2.components() {
        union
            .entry(component.id())
            .and_modify(|entry| entry.2 = true)
            .or_insert((component, false, true));
    }

    let constraints = *parent1.constraints();
    let mut child_a = Chromosome::new(constraints);
    let mut child_b = Chromosome::new(constraints);

    for (component, in_first, in_second) in union.into_values() {
        match (in_first, in_second) {
            (true, true) => {
                if rng.next_bool() {
                    child_a.add(component);
                } else {
                    child_b.add(component);
                }
            }
            (true, false) => {
                if rng.chance(CARRY_OVER_PROBABILITY) {
                    child_a.add(component);
                }
            }
            (false, _) => {
                if rng.chance(CARRY_OVER_PROBABILITY) {
                    child_b.add(component);
                }
            }
        }
    }

    (child_a, child_b)
}

/// Add/remove mutation.
///
/// A fair coin picks the kind. Addition (`true`) draws a catalog component
/// uniformly and adds it unless already selected. Removal drops a uniformly
/// drawn selected component. Either is a no-op when there is nothing to draw
/// from.
pub fn mutate<'a, R: RandomSource>(
    chromosome: &mut Chromosome<'a>,
    catalog: &'a [Component],
    rng: &mut R,
) {
    if rng.next_bool() {
        if catalog.is_empty() {
            return;
        }
        let component = &catalog[rng.next_index(catalog.len())];
        chromosome.add(component);
    } else {
        if chromosome.is_empty() {
            return;
        }
        let component = chromosome.components()[rng.next_index(chromosome.component_count())];
        chromosome.remove(component);
    }
}

/// The generational breeding strategy.
///
/// 1. Elitism: the top `floor(population_size × elitism_rate)` parents are
///    cloned unchanged.
/// 2. Until the generation is full: two tournament winners either go through
///    crossover (probability `crossover_rate`), each child then mutated with
///    probability `mutation_rate`, or are cloned unchanged. The second
///    offspring is dropped if it would overflow the generation.
#[derive(Debug, Clone, Default)]
pub struct CombinatorialBreedStrategy {
    elitism: ElitistSelection,
}

impl CombinatorialBreedStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BreedStrategy for CombinatorialBreedStrategy {
    fn breed<'a, R: RandomSource>(
        &self,
        parents: &[Chromosome<'a>],
        catalog: &'a [Component],
        evol_options: &EvolutionOptions,
        rng: &mut R,
    ) -> Result<Vec<Chromosome<'a>>> {
        if parents.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let population_size = evol_options.get_population_size();
        let tournament = TournamentSelection::new(evol_options.get_tournament_size())?;

        let mut offspring = Vec::with_capacity(population_size);
        offspring.extend(
            self.elitism
                .select(parents, evol_options.elite_count(), rng)?,
        );

        while offspring.len() < population_size {
            let parent1 = tournament.select_one(parents, rng)?;
            let parent2 = tournament.select_one(parents, rng)?;

            let (first, second) = if rng.chance(evol_options.get_crossover_rate()) {
                let (mut child_a, mut child_b) = crossover(parent1, parent2, rng);
                if rng.chance(evol_options.get_mutation_rate()) {
                    mutate(&mut child_a, catalog, rng);
                }
                if rng.chance(evol_options.get_mutation_rate()) {
                    mutate(&mut child_b, catalog, rng);
                }
                (child_a, child_b)
            } else {
                (parent1.clone(), parent2.clone())
            };

            offspring.push(first);
            if offspring.len() < population_size {
                offspring.push(second);
            }
        }

        Ok(offspring)
    }
}
