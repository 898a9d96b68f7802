//! # Solution Report
//!
//! A plain-data summary of an evolved circuit: fitness, feasibility, resource
//! usage relative to the limits and a per-category breakdown. Rendering goes
//! through `Display`; where the text ends up is the caller's business.

use std::collections::BTreeMap;
use std::fmt;

use crate::chromosome::Chromosome;
use crate::constraints::{CircuitConstraints, CircuitMetrics};

/// Part count and spend for one category group.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    /// Category prefix, e.g. `Sensor` for `Sensor_Temperatura`.
    pub group: String,
    pub count: usize,
    pub total_cost: f64,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionReport {
    pub fitness: f64,
    pub feasible: bool,
    pub metrics: CircuitMetrics,
    pub constraints: CircuitConstraints,
    /// Total cost as a percentage of the budget.
    pub budget_utilization: f64,
    /// Total size as a percentage of the board area.
    pub area_utilization: f64,
    /// Size of the catalog the circuit was drawn from.
    pub catalog_size: usize,
    /// Sorted by group name.
    pub categories: Vec<CategoryBreakdown>,
}

impl SolutionReport {
    /// Builds the report, computing and caching the chromosome's fitness if
    /// needed.
    pub fn new(chromosome: &mut Chromosome<'_>, catalog_size: usize) -> Self {
        let fitness = chromosome.fitness();
        let metrics = chromosome.metrics();
        let constraints = *chromosome.constraints();

        let mut groups: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
        for component in chromosome.components() {
            let entry = groups.entry(component.category_group()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += component.cost();
        }

        let categories = groups
            .into_iter()
            .map(|(group, (count, total_cost))| CategoryBreakdown {
                group: group.to_string(),
                count,
                total_cost,
            })
            .collect();

        Self {
            fitness,
            feasible: chromosome.is_feasible(),
            budget_utilization: metrics.total_cost / constraints.budget * 100.0,
            area_utilization: metrics.total_size / constraints.area * 100.0,
            metrics,
            constraints,
            catalog_size,
            categories,
        }
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fitness: {:.4}", self.fitness)?;
        writeln!(f, "Feasible: {}", if self.feasible { "yes" } else { "no" })?;
        writeln!(
            f,
            "Total cost: {:.2} ({:.1}% of budget {:.2})",
            self.metrics.total_cost, self.budget_utilization, self.constraints.budget
        )?;
        writeln!(
            f,
            "Average efficiency: {:.1}% (minimum {:.1}%)",
            self.metrics.average_efficiency * 100.0,
            self.constraints.min_efficiency * 100.0
        )?;
        writeln!(
            f,
            "Board area: {:.2} ({:.1}% of {:.2})",
            self.metrics.total_size, self.area_utilization, self.constraints.area
        )?;
        writeln!(
            f,
            "Components: {} of {} available",
            self.metrics.component_count, self.catalog_size
        )?;
        writeln!(f, "By category:")?;
        for category in &self.categories {
            writeln!(
                f,
                "  {}: {} components ({:.2})",
                category.group, category.count, category.total_cost
            )?;
        }
        Ok(())
    }
}
