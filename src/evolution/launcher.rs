use tracing::{debug, info};

use super::options::{EvolutionOptions, LogLevel};
use crate::{
    chromosome::Chromosome,
    component::Component,
    error::{GeneticError, OptionExt, Result},
    population::{evaluate, initialize, sort_by_fitness},
    rng::RandomSource,
    strategy::{BreedStrategy, CombinatorialBreedStrategy},
};

/// Why a run stopped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The best fitness seen exceeded the target fitness.
    TargetReached,
    /// Every configured generation was evaluated.
    GenerationLimit,
}

/// Represents the result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<'a> {
    /// The best circuit found over the whole run, with its fitness cached.
    pub chromosome: Chromosome<'a>,
    /// The fitness of `chromosome`.
    pub score: f64,
    /// How many populations were evaluated, the initial one included. An early
    /// stop on generation `g` reports `g + 1`. A run with `num_generations == 0`
    /// still evaluates the initial population and reports `1`.
    pub generations: usize,
    /// `TargetReached` whenever the best fitness exceeds the target, even if
    /// that happens on the initial population before anything was bred.
    pub termination: Termination,
    /// Best-ever fitness after each evaluated generation. Never decreases.
    pub history: Vec<f64>,
}

impl EvolutionResult<'_> {
    pub fn is_feasible(&self) -> bool {
        self.chromosome.is_feasible()
    }
}

/// Drives the generational loop with a given breeding strategy.
///
/// Each generation is evaluated, ranked and compared against the best-ever
/// chromosome. The run stops once the best-ever fitness is strictly above the
/// target fitness or when the generation limit is hit.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy>
where
    Strategy: BreedStrategy,
{
    strategy: Strategy,
}

impl<Strategy> EvolutionLauncher<Strategy>
where
    Strategy: BreedStrategy,
{
    /// Creates a new `EvolutionLauncher` instance with the specified breeding strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Evolves circuits drawn from `catalog`.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The components available to every chromosome. Chromosomes
    ///   borrow from it, so it must outlive the result.
    /// * `options` - Evolution options controlling the run.
    /// * `rng` - The only source of randomness; a seeded generator reproduces a
    ///   run exactly.
    ///
    /// # Returns
    ///
    /// The best chromosome seen in any generation. With `num_generations == 0`
    /// the initial population is still evaluated once and its best returned.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail [`EvolutionOptions::validate`]
    /// - A catalog component has a non-finite or out-of-range attribute
    /// - The breeding process fails
    ///
    /// # Performance
    ///
    /// Generations of at least `parallel_threshold` chromosomes are evaluated on
    /// the rayon pool. Random draws all happen on the calling thread, so the
    /// parallel path does not affect reproducibility.
    pub fn evolve<'a, R: RandomSource>(
        &self,
        catalog: &'a [Component],
        options: &EvolutionOptions,
        rng: &mut R,
    ) -> Result<EvolutionResult<'a>> {
        options.validate()?;

        if let Some(bad) = catalog.iter().find(|c| !c.is_well_formed()) {
            return Err(GeneticError::InvalidNumericValue(format!(
                "Component {} has invalid attributes (cost={}, efficiency={}, size={})",
                bad.id(),
                bad.cost(),
                bad.efficiency(),
                bad.size()
            )));
        }

        info!(
            catalog_size = catalog.len(),
            population_size = options.get_population_size(),
            num_generations = options.get_num_generations(),
            mutation_rate = options.get_mutation_rate(),
            crossover_rate = options.get_crossover_rate(),
            elitism_rate = options.get_elitism_rate(),
            tournament_size = options.get_tournament_size(),
            "starting circuit evolution"
        );

        let mut population = initialize(
            catalog,
            options.get_population_size(),
            *options.get_constraints(),
            options.get_inclusion_probability(),
            rng,
        );

        // The initial population is evaluated even when no generations are requested.
        let generation_budget = options.get_num_generations().max(1);
        let mut best: Option<(Chromosome<'a>, f64)> = None;
        let mut history = Vec::with_capacity(generation_budget);
        let mut termination = Termination::GenerationLimit;

        for generation in 0..generation_budget {
            evaluate(&mut population, options.get_parallel_threshold());
            sort_by_fitness(&mut population);

            let leader = population.first().ok_or_else_genetic(|| {
                GeneticError::Evolution(format!(
                    "No chromosomes left to evaluate in generation {}",
                    generation
                ))
            })?;
            let leader_score = leader.score();

            let improved = best
                .as_ref()
                .map_or(true, |(_, best_score)| leader_score > *best_score);
            if improved {
                best = Some((leader.clone(), leader_score));
            }

            let best_score = best.as_ref().map_or(leader_score, |(_, score)| *score);
            history.push(best_score);

            match options.get_log_level() {
                LogLevel::Minimal => {
                    info!(generation, best_fitness = best_score, "generation evaluated");
                }
                LogLevel::Verbose => {
                    info!(generation, best_fitness = best_score, "generation evaluated");
                    for chromosome in &population {
                        debug!(generation, "{}", chromosome);
                    }
                }
                LogLevel::None => {}
            }

            if best_score > options.get_target_fitness() {
                termination = Termination::TargetReached;
                break;
            }

            if generation + 1 < generation_budget {
                population = self
                    .strategy
                    .breed(&population, catalog, options, rng)
                    .map_err(|e| {
                        GeneticError::Breeding(format!(
                            "Failed to breed candidates in generation {}: {}",
                            generation, e
                        ))
                    })?;
            }
        }

        let (mut chromosome, score) = best.ok_or_else_genetic(|| {
            GeneticError::Evolution(
                "Evolution completed but no viable candidates were produced".to_string(),
            )
        })?;
        chromosome.fitness();

        info!(
            best_fitness = score,
            generations = history.len(),
            feasible = chromosome.is_feasible(),
            components = chromosome.component_count(),
            reason = ?termination,
            "circuit evolution finished"
        );

        Ok(EvolutionResult {
            chromosome,
            score,
            generations: history.len(),
            termination,
            history,
        })
    }
}

impl Default for EvolutionLauncher<CombinatorialBreedStrategy> {
    fn default() -> Self {
        Self::new(CombinatorialBreedStrategy::default())
    }
}
