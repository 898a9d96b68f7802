use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::rng::RandomSource;

/// Trait for selection strategies.
///
/// Selection strategies choose chromosomes from an evaluated population based
/// on their fitness. Selected chromosomes are returned as clones, so the
/// caller can build the next generation without touching the current one.
///
/// # Examples
///
/// ```
/// use circuit_ga::chromosome::Chromosome;
/// use circuit_ga::component::Component;
/// use circuit_ga::constraints::CircuitConstraints;
/// use circuit_ga::rng::RandomNumberGenerator;
/// use circuit_ga::selection::{ElitistSelection, SelectionStrategy};
///
/// let parts = vec![
///     Component::new(1, "Sensor_A", 10.0, 0.9, 1.0),
///     Component::new(2, "Sensor_B", 12.0, 0.8, 1.0),
/// ];
/// let constraints = CircuitConstraints::default();
/// let population = vec![
///     Chromosome::with_components([&parts[0]], constraints),
///     Chromosome::with_components([&parts[0], &parts[1]], constraints),
/// ];
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let selected = ElitistSelection::default()
///     .select(&population, 1, &mut rng)
///     .unwrap();
///
/// assert_eq!(selected.len(), 1);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` chromosomes from the population.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if the population is empty and
    /// at least one chromosome is requested.
    fn select<'a, R: RandomSource>(
        &self,
        population: &[Chromosome<'a>],
        num_to_select: usize,
        rng: &mut R,
    ) -> Result<Vec<Chromosome<'a>>>;
}
