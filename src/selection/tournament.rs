use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::rng::RandomSource;
use crate::selection::selection_strategy::SelectionStrategy;

/// Tournament selection.
///
/// Each tournament draws `tournament_size` chromosomes uniformly at random,
/// with replacement, and keeps the fittest. When several entrants share the best
/// fitness the first one drawn wins.
///
/// - Smaller tournaments lead to more exploration (closer to random selection)
/// - Larger tournaments lead to more exploitation (closer to elitist selection)
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new tournament selection.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament over the population and returns the winner's
    /// index.
    ///
    /// Chromosomes are compared through [`Chromosome::score`], so an evaluated
    /// population is never re-scored.
    pub fn run_tournament<R: RandomSource>(
        &self,
        population: &[Chromosome<'_>],
        rng: &mut R,
    ) -> Result<usize> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut best_idx = rng.next_index(population.len());
        let mut best_fitness = population[best_idx].score();

        for _ in 1..self.tournament_size {
            let idx = rng.next_index(population.len());
            let fitness = population[idx].score();
            if fitness > best_fitness {
                best_idx = idx;
                best_fitness = fitness;
            }
        }

        Ok(best_idx)
    }

    /// Runs a single tournament and borrows the winner.
    pub fn select_one<'p, 'a, R: RandomSource>(
        &self,
        population: &'p [Chromosome<'a>],
        rng: &mut R,
    ) -> Result<&'p Chromosome<'a>> {
        let idx = self.run_tournament(population, rng)?;
        Ok(&population[idx])
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 3 }
    }
}

impl SelectionStrategy for TournamentSelection {
    /// Runs `num_to_select` independent tournaments. The same chromosome may win
    /// more than once.
    fn select<'a, R: RandomSource>(
        &self,
        population: &[Chromosome<'a>],
        num_to_select: usize,
        rng: &mut R,
    ) -> Result<Vec<Chromosome<'a>>> {
        if population.is_empty() && num_to_select > 0 {
            return Err(GeneticError::EmptyPopulation);
        }

        (0..num_to_select)
            .map(|_| self.select_one(population, rng).map(Chromosome::clone))
            .collect()
    }
}
