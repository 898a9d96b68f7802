pub mod launcher;
pub mod options;

pub use launcher::{EvolutionLauncher, EvolutionResult, Termination};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
