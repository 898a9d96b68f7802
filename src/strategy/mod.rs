//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for
//! producing the next generation from an evaluated, ranked one.
pub mod combinatorial;

use std::fmt::Debug;

use crate::{
    chromosome::Chromosome, component::Component, error::Result,
    evolution::options::EvolutionOptions, rng::RandomSource,
};

/// # BreedStrategy
///
/// Breeds a complete new generation. Implementations must not mutate the
/// parents: every chromosome in the output is either a clone or freshly built.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds the next generation.
    ///
    /// ## Parameters
    ///
    /// - `parents`: the current generation, evaluated and sorted by descending
    ///   fitness.
    /// - `catalog`: the components mutation may draw from.
    /// - `evol_options`: population size and operator rates.
    /// - `rng`: the run's random source.
    ///
    /// ## Returns
    ///
    /// Exactly `evol_options.get_population_size()` chromosomes.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The parents slice is empty
    /// - The options carry an invalid tournament size
    fn breed<'a, R: RandomSource>(
        &self,
        parents: &[Chromosome<'a>],
        catalog: &'a [Component],
        evol_options: &EvolutionOptions,
        rng: &mut R,
    ) -> Result<Vec<Chromosome<'a>>>;
}

pub use combinatorial::{crossover, mutate, CombinatorialBreedStrategy};
