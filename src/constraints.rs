//! # Constraints Module
//!
//! The three hard limits every circuit is judged against, and the penalty
//! arithmetic applied when a circuit breaks them.
//!
//! - **Budget**: total cost must not exceed `budget`.
//! - **Board area**: total size must not exceed `area`.
//! - **Minimum efficiency**: average efficiency must be at least
//!   `min_efficiency`.
//!
//! All three comparisons are non-strict, so a circuit sitting exactly on a
//! limit is feasible.
//!
//! ## Example
//!
//! ```rust
//! use circuit_ga::constraints::{CircuitConstraints, CircuitMetrics};
//!
//! let constraints = CircuitConstraints::default();
//! let metrics = CircuitMetrics {
//!     total_cost: 1500.0,
//!     total_size: 50.0,
//!     average_efficiency: 0.9,
//!     component_count: 10,
//! };
//!
//! let violations = constraints.check(&metrics);
//! assert_eq!(violations.len(), 1);
//! assert_eq!(constraints.total_penalty(&metrics), 1000.0);
//! ```

use std::fmt::{self, Display};

use crate::error::{GeneticError, Result};

/// Penalty weight applied to the relative budget overrun.
pub const BUDGET_PENALTY_WEIGHT: f64 = 2000.0;
/// Penalty weight applied to the relative board area overrun.
pub const AREA_PENALTY_WEIGHT: f64 = 2000.0;
/// Penalty weight applied to the absolute efficiency shortfall.
pub const EFFICIENCY_PENALTY_WEIGHT: f64 = 1000.0;

/// Aggregate measurements of a circuit, the input to every constraint check.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitMetrics {
    pub total_cost: f64,
    pub total_size: f64,
    /// Mean efficiency of the selected components, `0.0` when none are selected.
    pub average_efficiency: f64,
    pub component_count: usize,
}

/// Which limit a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Budget,
    BoardArea,
    MinEfficiency,
}

impl ConstraintKind {
    pub fn name(&self) -> &'static str {
        match self {
            ConstraintKind::Budget => "Budget",
            ConstraintKind::BoardArea => "BoardArea",
            ConstraintKind::MinEfficiency => "MinEfficiency",
        }
    }
}

/// Represents a violation of a constraint.
#[derive(Debug, Clone)]
pub struct ConstraintViolation {
    kind: ConstraintKind,
    description: String,
    /// Penalty contributed by this violation. Always strictly positive.
    severity: f64,
}

impl ConstraintViolation {
    fn new<D: Into<String>>(kind: ConstraintKind, description: D, severity: f64) -> Self {
        Self {
            kind,
            description: description.into(),
            severity,
        }
    }

    /// Returns which limit was broken.
    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    /// Returns the name of the constraint that was violated.
    pub fn constraint_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Returns the description of the violation.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the penalty this violation adds to the circuit.
    pub fn severity(&self) -> f64 {
        self.severity
    }
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Constraint '{}' violated: {} (severity: {})",
            self.constraint_name(),
            self.description(),
            self.severity()
        )
    }
}

/// The hard limits of the board.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitConstraints {
    /// Maximum total cost, in currency units.
    pub budget: f64,
    /// Maximum total component size, in area units.
    pub area: f64,
    /// Minimum average efficiency.
    pub min_efficiency: f64,
}

impl Default for CircuitConstraints {
    fn default() -> Self {
        Self {
            budget: 1000.0,
            area: 100.0,
            min_efficiency: 0.6,
        }
    }
}

impl CircuitConstraints {
    pub fn new(budget: f64, area: f64, min_efficiency: f64) -> Self {
        Self {
            budget,
            area,
            min_efficiency,
        }
    }

    /// Validates the limits.
    ///
    /// Budget and area divide the penalty terms, so both must be finite and
    /// strictly positive. The efficiency floor must be finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.budget.is_finite() && self.budget > 0.0) {
            return Err(GeneticError::Configuration(format!(
                "Budget must be a positive finite number, got {}",
                self.budget
            )));
        }
        if !(self.area.is_finite() && self.area > 0.0) {
            return Err(GeneticError::Configuration(format!(
                "Board area must be a positive finite number, got {}",
                self.area
            )));
        }
        if !self.min_efficiency.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Minimum efficiency must be finite, got {}",
                self.min_efficiency
            )));
        }
        Ok(())
    }

    /// Returns `true` when all three limits are respected.
    pub fn is_satisfied(&self, metrics: &CircuitMetrics) -> bool {
        metrics.total_cost <= self.budget
            && metrics.total_size <= self.area
            && metrics.average_efficiency >= self.min_efficiency
    }

    /// Checks the metrics against every limit.
    ///
    /// Returns one violation per broken limit, each carrying its penalty as the
    /// severity. An empty vector means the circuit is feasible.
    pub fn check(&self, metrics: &CircuitMetrics) -> Vec<ConstraintViolation> {
        let mut violations = Vec::new();

        if metrics.total_cost > self.budget {
            let overrun = metrics.total_cost - self.budget;
            violations.push(ConstraintViolation::new(
                ConstraintKind::Budget,
                format!(
                    "Total cost {:.2} exceeds budget {:.2}",
                    metrics.total_cost, self.budget
                ),
                overrun / self.budget * BUDGET_PENALTY_WEIGHT,
            ));
        }

        if metrics.total_size > self.area {
            let overrun = metrics.total_size - self.area;
            violations.push(ConstraintViolation::new(
                ConstraintKind::BoardArea,
                format!(
                    "Total size {:.2} exceeds board area {:.2}",
                    metrics.total_size, self.area
                ),
                overrun / self.area * AREA_PENALTY_WEIGHT,
            ));
        }

        if metrics.average_efficiency < self.min_efficiency {
            let shortfall = self.min_efficiency - metrics.average_efficiency;
            violations.push(ConstraintViolation::new(
                ConstraintKind::MinEfficiency,
                format!(
                    "Average efficiency {:.3} is below the minimum {:.3}",
                    metrics.average_efficiency, self.min_efficiency
                ),
                shortfall * EFFICIENCY_PENALTY_WEIGHT,
            ));
        }

        violations
    }

    /// Sums the penalties of all violations, `0.0` for a feasible circuit.
    pub fn total_penalty(&self, metrics: &CircuitMetrics) -> f64 {
        self.check(metrics)
            .iter()
            .fold(0.0, |acc, v| acc + v.severity())
    }
}
