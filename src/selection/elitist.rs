use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::population::by_descending_fitness;
use crate::rng::RandomSource;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that keeps the fittest chromosomes.
///
/// Chromosomes are ranked by descending fitness (stable, so among equals the
/// earlier one wins) and the top `num_to_select` are cloned. Asking for more
/// chromosomes than the population holds returns the whole population, ranked.
///
/// Elitism guarantees that the best circuit found in one generation survives
/// unchanged into the next.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }

    /// Returns population indices ordered from fittest to least fit.
    pub fn rank(&self, population: &[Chromosome<'_>]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..population.len()).collect();
        indices.sort_by(|&a, &b| by_descending_fitness(population[a].score(), population[b].score()));
        indices
    }
}

impl SelectionStrategy for ElitistSelection {
    fn select<'a, R: RandomSource>(
        &self,
        population: &[Chromosome<'a>],
        num_to_select: usize,
        _rng: &mut R,
    ) -> Result<Vec<Chromosome<'a>>> {
        if num_to_select == 0 {
            return Ok(Vec::new());
        }

        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        Ok(self
            .rank(population)
            .into_iter()
            .take(num_to_select)
            .map(|idx| population[idx].clone())
            .collect())
    }
}
