//! # circuit-ga
//!
//! A genetic algorithm that picks a subset of electronic components for a
//! board, rewarding efficient, dense and well-utilized designs while keeping
//! cost, board area and average efficiency within hard limits.
//!
//! ## Example
//!
//! ```rust
//! use circuit_ga::catalog::sample_components;
//! use circuit_ga::evolution::{EvolutionLauncher, EvolutionOptions};
//! use circuit_ga::report::SolutionReport;
//! use circuit_ga::rng::RandomNumberGenerator;
//!
//! let catalog = sample_components();
//! let options = EvolutionOptions::builder()
//!     .population_size(30)
//!     .num_generations(20)
//!     .build();
//! let mut rng = RandomNumberGenerator::from_seed(42);
//!
//! let mut result = EvolutionLauncher::default()
//!     .evolve(&catalog, &options, &mut rng)
//!     .unwrap();
//!
//! let report = SolutionReport::new(&mut result.chromosome, catalog.len());
//! assert_eq!(report.fitness, result.score);
//! ```
pub mod catalog;
pub mod chromosome;
pub mod component;
pub mod constraints;
pub mod error;
pub mod evolution;
pub mod population;
pub mod report;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use chromosome::Chromosome;
pub use component::{Component, ComponentId};
pub use constraints::CircuitConstraints;
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel, Termination};
pub use rng::{RandomNumberGenerator, RandomSource};
