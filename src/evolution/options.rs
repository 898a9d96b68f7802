//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every tunable parameter of a run: the
//! population and generation counts, operator rates, tournament size, the
//! early-stop threshold, board constraints, logging verbosity and the
//! parallel-evaluation threshold.
//!
//! ## Example
//!
//! ```rust
//! use circuit_ga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Defaults: 100 individuals, 200 generations, mutation 0.15,
//! // crossover 0.8, elitism 0.1, tournament 3.
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 100);
//!
//! let custom_options = EvolutionOptions::builder()
//!     .population_size(50)
//!     .num_generations(300)
//!     .mutation_rate(0.2)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert!(custom_options.validate().is_ok());
//! ```
//!
//! ## Loading from JSON
//!
//! With the `serde` feature enabled, options can be read from JSON. Missing
//! fields keep their defaults:
//!
//! ```rust,ignore
//! let options = EvolutionOptions::from_json_str(r#"{ "population_size": 40 }"#)?;
//! ```

use tracing::warn;

use crate::constraints::CircuitConstraints;
use crate::error::{GeneticError, Result};

/// How much the evolution loop reports through `tracing`.
///
/// - `Verbose`: one `debug!` event per chromosome plus the per-generation summary.
/// - `Minimal`: one `info!` event per generation.
/// - `None`: only run start and end.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    num_generations: usize,
    mutation_rate: f64,
    crossover_rate: f64,
    elitism_rate: f64,
    tournament_size: usize,
    /// Per-item inclusion probability used while seeding the first generation.
    inclusion_probability: f64,
    /// Best-ever fitness strictly above this value ends the run early.
    target_fitness: f64,
    constraints: CircuitConstraints,
    log_level: LogLevel,
    /// Minimum population size evaluated in parallel.
    parallel_threshold: usize,
}

impl EvolutionOptions {
    /// Creates options with the given core parameters; everything else keeps its
    /// default.
    pub fn new(
        population_size: usize,
        num_generations: usize,
        mutation_rate: f64,
        crossover_rate: f64,
        elitism_rate: f64,
        tournament_size: usize,
    ) -> Self {
        Self {
            population_size,
            num_generations,
            mutation_rate,
            crossover_rate,
            elitism_rate,
            tournament_size,
            ..Self::default()
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_elitism_rate(&self) -> f64 {
        self.elitism_rate
    }

    pub fn get_tournament_size(&self) -> usize {
        self.tournament_size
    }

    pub fn get_inclusion_probability(&self) -> f64 {
        self.inclusion_probability
    }

    pub fn get_target_fitness(&self) -> f64 {
        self.target_fitness
    }

    pub fn get_constraints(&self) -> &CircuitConstraints {
        &self.constraints
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Returns the minimum population size evaluated in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Number of chromosomes carried over unchanged each generation:
    /// `floor(population_size × elitism_rate)`, never more than the population.
    pub fn elite_count(&self) -> usize {
        let count = (self.population_size as f64 * self.elitism_rate).floor() as usize;
        count.min(self.population_size)
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_mutation_rate(&mut self, rate: f64) {
        self.mutation_rate = rate;
    }

    pub fn set_crossover_rate(&mut self, rate: f64) {
        self.crossover_rate = rate;
    }

    pub fn set_elitism_rate(&mut self, rate: f64) {
        self.elitism_rate = rate;
    }

    pub fn set_tournament_size(&mut self, tournament_size: usize) {
        self.tournament_size = tournament_size;
    }

    pub fn set_inclusion_probability(&mut self, probability: f64) {
        self.inclusion_probability = probability;
    }

    pub fn set_target_fitness(&mut self, target: f64) {
        self.target_fitness = target;
    }

    pub fn set_constraints(&mut self, constraints: CircuitConstraints) {
        self.constraints = constraints;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks that the options describe a runnable search.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if:
    /// - the population size is zero
    /// - the tournament size is zero or larger than the population
    /// - any rate or the inclusion probability lies outside `[0, 1]`
    /// - the target fitness is not finite
    /// - the constraints are invalid
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(e) = &result {
            warn!(error = %e, "rejected evolution options");
        }
        result
    }

    fn check(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.tournament_size == 0 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        if self.tournament_size > self.population_size {
            return Err(GeneticError::Configuration(format!(
                "Tournament size ({}) cannot exceed population size ({})",
                self.tournament_size, self.population_size
            )));
        }

        for (name, value) in [
            ("Mutation rate", self.mutation_rate),
            ("Crossover rate", self.crossover_rate),
            ("Elitism rate", self.elitism_rate),
            ("Inclusion probability", self.inclusion_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeneticError::Configuration(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }

        if !self.target_fitness.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Target fitness must be finite, got {}",
                self.target_fitness
            )));
        }

        self.constraints.validate()
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

#[cfg(feature = "serde")]
impl EvolutionOptions {
    /// Parses options from a JSON document and validates them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a JSON file and validates them.
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_generations: 200,
            mutation_rate: 0.15,
            crossover_rate: 0.8,
            elitism_rate: 0.1,
            tournament_size: 3,
            inclusion_probability: 0.7,
            target_fitness: 0.95,
            constraints: CircuitConstraints::default(),
            log_level: LogLevel::None,
            parallel_threshold: 1000,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the values of `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    num_generations: Option<usize>,
    mutation_rate: Option<f64>,
    crossover_rate: Option<f64>,
    elitism_rate: Option<f64>,
    tournament_size: Option<usize>,
    inclusion_probability: Option<f64>,
    target_fitness: Option<f64>,
    constraints: Option<CircuitConstraints>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn elitism_rate(mut self, value: f64) -> Self {
        self.elitism_rate = Some(value);
        self
    }

    pub fn tournament_size(mut self, value: usize) -> Self {
        self.tournament_size = Some(value);
        self
    }

    pub fn inclusion_probability(mut self, value: f64) -> Self {
        self.inclusion_probability = Some(value);
        self
    }

    pub fn target_fitness(mut self, value: f64) -> Self {
        self.target_fitness = Some(value);
        self
    }

    pub fn constraints(mut self, value: CircuitConstraints) -> Self {
        self.constraints = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance. Validation is left to
    /// [`EvolutionOptions::validate`].
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(default.population_size),
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            mutation_rate: self.mutation_rate.unwrap_or(default.mutation_rate),
            crossover_rate: self.crossover_rate.unwrap_or(default.crossover_rate),
            elitism_rate: self.elitism_rate.unwrap_or(default.elitism_rate),
            tournament_size: self.tournament_size.unwrap_or(default.tournament_size),
            inclusion_probability: self
                .inclusion_probability
                .unwrap_or(default.inclusion_probability),
            target_fitness: self.target_fitness.unwrap_or(default.target_fitness),
            constraints: self.constraints.unwrap_or(default.constraints),
            log_level: self.log_level.unwrap_or(default.log_level),
            parallel_threshold: self.parallel_threshold.unwrap_or(default.parallel_threshold),
        }
    }
}
