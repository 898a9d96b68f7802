//! # Chromosome
//!
//! A `Chromosome` is one candidate circuit: a set of distinct components
//! borrowed from the catalog, the constraints it is scored against, and a
//! memoized fitness value.
//!
//! The fitness cache is an `Option<f64>`. It is filled on the first call to
//! [`Chromosome::fitness`] and cleared by every successful [`Chromosome::add`]
//! or [`Chromosome::remove`]. Cloning a chromosome copies the selection but not
//! the cache.
//!
//! ## Example
//!
//! ```rust
//! use circuit_ga::chromosome::Chromosome;
//! use circuit_ga::component::Component;
//! use circuit_ga::constraints::CircuitConstraints;
//!
//! let catalog = vec![
//!     Component::new(1, "Sensor_Temperatura", 8.0, 0.95, 1.5),
//!     Component::new(2, "LED_RGB", 3.0, 0.85, 1.2),
//! ];
//!
//! let mut circuit = Chromosome::new(CircuitConstraints::default());
//! circuit.add(&catalog[0]);
//! circuit.add(&catalog[1]);
//!
//! assert!(circuit.is_feasible());
//! assert!(circuit.fitness() > 0.0);
//! ```

use std::fmt;

use crate::component::{Component, ComponentId};
use crate::constraints::{CircuitConstraints, CircuitMetrics, ConstraintViolation};

/// Component count at which the count term reaches its full weight.
const COUNT_NORMALIZER: f64 = 50.0;

const COUNT_WEIGHT: f64 = 0.35;
const EFFICIENCY_WEIGHT: f64 = 0.30;
const BUDGET_USE_WEIGHT: f64 = 0.15;
const AREA_USE_WEIGHT: f64 = 0.10;

const DENSITY_DIVISOR: f64 = 5.0;
const DENSITY_BONUS_CAP: f64 = 0.2;
const COST_EFFICIENCY_BONUS_CAP: f64 = 0.15;

/// Circuits with at least this many parts and at least `DENSE_EFFICIENCY`
/// average efficiency earn `DENSE_BONUS`.
const DENSE_COUNT: usize = 20;
const DENSE_EFFICIENCY: f64 = 0.8;
const DENSE_BONUS: f64 = 0.2;

/// One candidate circuit.
#[derive(Debug)]
pub struct Chromosome<'a> {
    selected: Vec<&'a Component>,
    constraints: CircuitConstraints,
    fitness: Option<f64>,
}

impl<'a> Chromosome<'a> {
    /// Creates an empty circuit.
    pub fn new(constraints: CircuitConstraints) -> Self {
        Self {
            selected: Vec::new(),
            constraints,
            fitness: None,
        }
    }

    /// Creates a circuit from an explicit selection.
    ///
    /// Later duplicates of an identifier are ignored, so the result never holds
    /// the same component twice.
    pub fn with_components<I>(components: I, constraints: CircuitConstraints) -> Self
    where
        I: IntoIterator<Item = &'a Component>,
    {
        let mut chromosome = Self::new(constraints);
        for component in components {
            chromosome.add(component);
        }
        chromosome
    }

    /// Adds a component unless one with the same identifier is already selected.
    ///
    /// Returns `true` if the selection changed. A rejected duplicate leaves the
    /// fitness cache intact.
    pub fn add(&mut self, component: &'a Component) -> bool {
        if self.contains(component.id()) {
            return false;
        }
        self.selected.push(component);
        self.fitness = None;
        true
    }

    /// Removes the component with the same identifier, if selected.
    ///
    /// Returns `true` if the selection changed.
    pub fn remove(&mut self, component: &Component) -> bool {
        match self.selected.iter().position(|c| c.id() == component.id()) {
            Some(pos) => {
                self.selected.remove(pos);
                self.fitness = None;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.selected.iter().any(|c| c.id() == id)
    }

    /// Returns the selected components in insertion order.
    pub fn components(&self) -> &[&'a Component] {
        &self.selected
    }

    pub fn component_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn constraints(&self) -> &CircuitConstraints {
        &self.constraints
    }

    /// Sum of component costs, `+0.0` when empty.
    pub fn total_cost(&self) -> f64 {
        self.selected.iter().fold(0.0, |acc, c| acc + c.cost())
    }

    /// Sum of component sizes, `+0.0` when empty.
    pub fn total_size(&self) -> f64 {
        self.selected.iter().fold(0.0, |acc, c| acc + c.size())
    }

    /// Mean efficiency of the selection, `0.0` when empty.
    pub fn average_efficiency(&self) -> f64 {
        if self.selected.is_empty() {
            return 0.0;
        }
        let sum = self.selected.iter().fold(0.0, |acc, c| acc + c.efficiency());
        sum / self.selected.len() as f64
    }

    pub fn metrics(&self) -> CircuitMetrics {
        CircuitMetrics {
            total_cost: self.total_cost(),
            total_size: self.total_size(),
            average_efficiency: self.average_efficiency(),
            component_count: self.component_count(),
        }
    }

    /// Returns `true` when budget, area and efficiency limits all hold.
    ///
    /// Always recomputed from the current selection.
    pub fn is_feasible(&self) -> bool {
        self.constraints.is_satisfied(&self.metrics())
    }

    /// Lists the limits this circuit breaks, with their penalties.
    pub fn violations(&self) -> Vec<ConstraintViolation> {
        self.constraints.check(&self.metrics())
    }

    /// Returns the fitness, computing and caching it if needed.
    pub fn fitness(&mut self) -> f64 {
        match self.fitness {
            Some(score) => score,
            None => {
                let score = self.evaluate();
                self.fitness = Some(score);
                score
            }
        }
    }

    /// Returns the cached fitness, if any, without computing it.
    pub fn cached_fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Returns the fitness without touching the cache.
    ///
    /// Uses the cached value when present and computes a fresh one otherwise.
    /// Intended for read-only access to an already evaluated population.
    pub fn score(&self) -> f64 {
        self.fitness.unwrap_or_else(|| self.evaluate())
    }

    /// Computes the fitness of the current selection.
    ///
    /// An infeasible circuit scores the negated sum of its constraint penalties.
    /// A feasible one scores a weighted sum that rewards part count, efficiency
    /// and budget/area utilization, plus density and cost-efficiency bonuses.
    pub fn evaluate(&self) -> f64 {
        let metrics = self.metrics();

        let violations = self.constraints.check(&metrics);
        if !violations.is_empty() {
            let penalty: f64 = violations.iter().map(|v| v.severity()).sum();
            return -penalty;
        }

        let CircuitMetrics {
            total_cost,
            total_size,
            average_efficiency,
            component_count,
        } = metrics;
        let count = component_count as f64;

        let density = count / total_size.max(1.0);
        let density_bonus = (density / DENSITY_DIVISOR).min(DENSITY_BONUS_CAP);

        let cost_efficiency = if component_count > 0 {
            (average_efficiency * count) / total_cost
        } else {
            0.0
        };
        let cost_efficiency_bonus = cost_efficiency.min(COST_EFFICIENCY_BONUS_CAP);

        let mut score = COUNT_WEIGHT * (count / COUNT_NORMALIZER)
            + EFFICIENCY_WEIGHT * average_efficiency
            + BUDGET_USE_WEIGHT * (total_cost / self.constraints.budget)
            + AREA_USE_WEIGHT * (total_size / self.constraints.area)
            + density_bonus
            + cost_efficiency_bonus;

        if component_count >= DENSE_COUNT && average_efficiency >= DENSE_EFFICIENCY {
            score += DENSE_BONUS;
        }

        score
    }
}

impl Clone for Chromosome<'_> {
    /// Copies the selection; the clone starts with an empty fitness cache.
    fn clone(&self) -> Self {
        Self {
            selected: self.selected.clone(),
            constraints: self.constraints,
            fitness: None,
        }
    }
}

impl fmt::Display for Chromosome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metrics = self.metrics();
        write!(
            f,
            "Circuit[components={}, cost={:.2}, efficiency={:.3}, size={:.2}, fitness={:.3}, feasible={}]",
            metrics.component_count,
            metrics.total_cost,
            metrics.average_efficiency,
            metrics.total_size,
            self.score(),
            self.constraints.is_satisfied(&metrics)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(id: ComponentId, cost: f64, eff: f64, size: f64) -> Component {
        Component::new(id, format!("Part_{}", id), cost, eff, size)
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let a = part(1, 10.0, 0.9, 1.0);
        let a_again = part(1, 50.0, 0.1, 5.0);
        let mut c = Chromosome::new(CircuitConstraints::default());

        assert!(c.add(&a));
        assert!(!c.add(&a_again));
        assert_eq!(c.component_count(), 1);
        assert_eq!(c.total_cost(), 10.0);
    }

    #[test]
    fn test_with_components_dedupes() {
        let a = part(1, 10.0, 0.9, 1.0);
        let b = part(2, 20.0, 0.8, 2.0);
        let c = Chromosome::with_components([&a, &b, &a], CircuitConstraints::default());

        assert_eq!(c.component_count(), 2);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let a = part(1, 10.0, 0.9, 1.0);
        let b = part(2, 20.0, 0.8, 2.0);
        let mut c = Chromosome::with_components([&a], CircuitConstraints::default());
        let before = c.fitness();

        assert!(!c.remove(&b));
        assert_eq!(c.cached_fitness(), Some(before));
        assert!(c.remove(&a));
        assert!(c.is_empty());
        assert_eq!(c.cached_fitness(), None);
    }

    #[test]
    fn test_fitness_is_deterministic() {
        let parts: Vec<Component> = (1..=5).map(|i| part(i, 10.0 * i as f64, 0.9, 2.0)).collect();
        let mut c = Chromosome::with_components(parts.iter(), CircuitConstraints::default());

        let first = c.fitness();
        let second = c.fitness();
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(first.to_bits(), c.evaluate().to_bits());
    }

    #[test]
    fn test_cache_invalidated_by_add_and_remove() {
        let a = part(1, 10.0, 0.9, 1.0);
        let b = part(2, 20.0, 0.7, 2.0);
        let mut c = Chromosome::with_components([&a], CircuitConstraints::default());

        let only_a = c.fitness();
        c.add(&b);
        assert_eq!(c.cached_fitness(), None);
        let a_and_b = c.fitness();
        assert_ne!(only_a, a_and_b);
        assert_eq!(a_and_b, c.evaluate());

        c.remove(&b);
        assert_eq!(c.fitness(), only_a);
    }

    #[test]
    fn test_clone_drops_cache() {
        let a = part(1, 10.0, 0.9, 1.0);
        let mut c = Chromosome::with_components([&a], CircuitConstraints::default());
        c.fitness();

        let mut copy = c.clone();
        assert_eq!(copy.cached_fitness(), None);
        assert_eq!(copy.fitness(), c.fitness());

        // Independent selections.
        let b = part(2, 5.0, 0.9, 1.0);
        copy.add(&b);
        assert_eq!(c.component_count(), 1);
        assert_eq!(copy.component_count(), 2);
    }

    #[test]
    fn test_single_budget_violation() {
        let a = part(1, 10.0, 0.9, 1.0);
        let b = part(2, 2000.0, 0.9, 1.0);
        let mut c = Chromosome::with_components([&b], CircuitConstraints::default());

        assert!(!c.is_feasible());
        assert_eq!(c.fitness(), -2000.0);

        // The cheap part alone is fine.
        let mut ok = Chromosome::with_components([&a], CircuitConstraints::default());
        assert!(ok.fitness() > 0.0);
    }

    #[test]
    fn test_empty_circuit_efficiency_penalty() {
        let mut c = Chromosome::new(CircuitConstraints::default());
        assert_eq!(c.average_efficiency(), 0.0);
        assert!(!c.is_feasible());
        assert!((c.fitness() + 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_totals_are_positive_zero() {
        let c = Chromosome::new(CircuitConstraints::default());
        assert!(c.total_cost().is_sign_positive());
        assert!(c.total_size().is_sign_positive());
        assert!(c.metrics().total_cost.is_sign_positive());
        assert_eq!(
            c.to_string(),
            "Circuit[components=0, cost=0.00, efficiency=0.000, size=0.00, fitness=-600.000, feasible=false]"
        );
    }

    #[test]
    fn test_penalty_monotonic_in_budget_overrun() {
        let small = part(1, 1200.0, 0.9, 1.0);
        let large = part(2, 1800.0, 0.9, 1.0);
        let mut c_small = Chromosome::with_components([&small], CircuitConstraints::default());
        let mut c_large = Chromosome::with_components([&large], CircuitConstraints::default());

        assert!(c_small.fitness() < 0.0);
        assert!(c_large.fitness() < c_small.fitness());
    }

    #[test]
    fn test_feasibility_boundary() {
        let a = part(1, 600.0, 0.5, 40.0);
        let b = part(2, 400.0, 0.7, 60.0);
        let c = Chromosome::with_components([&a, &b], CircuitConstraints::default());

        assert_eq!(c.total_cost(), 1000.0);
        assert_eq!(c.total_size(), 100.0);

        // Pin the floor to the computed average so the check is exact.
        let exact = CircuitConstraints::new(1000.0, 100.0, c.average_efficiency());
        let mut on_edge = Chromosome::with_components([&a, &b], exact);
        assert!(on_edge.is_feasible());
        assert!(on_edge.violations().is_empty());
        assert!(on_edge.fitness() > 0.0);
    }

    #[test]
    fn test_feasible_score_formula() {
        // N = 2, C = 30, S = 4, E = 0.8
        let a = part(1, 10.0, 0.9, 1.5);
        let b = part(2, 20.0, 0.7, 2.5);
        let mut c = Chromosome::with_components([&a, &b], CircuitConstraints::default());

        let density_bonus: f64 = (2.0 / 4.0 / 5.0_f64).min(0.2);
        let cost_eff_bonus: f64 = ((0.8 * 2.0) / 30.0_f64).min(0.15);
        let expected = 0.35 * (2.0 / 50.0)
            + 0.30 * 0.8
            + 0.15 * (30.0 / 1000.0)
            + 0.10 * (4.0 / 100.0)
            + density_bonus
            + cost_eff_bonus;

        assert!((c.fitness() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_dense_efficient_bonus() {
        // 25 parts, each eff 0.85, cost 10, size 2 -> C = 250, S = 50.
        let parts: Vec<Component> = (1..=25).map(|i| part(i, 10.0, 0.85, 2.0)).collect();
        let mut c = Chromosome::with_components(parts.iter(), CircuitConstraints::default());
        assert!(c.is_feasible());

        let e = c.average_efficiency();
        let density_bonus: f64 = (25.0 / 50.0 / 5.0_f64).min(0.2);
        let cost_eff_bonus: f64 = ((e * 25.0) / 250.0_f64).min(0.15);
        let base = 0.35 * (25.0 / 50.0)
            + 0.30 * e
            + 0.15 * (250.0 / 1000.0)
            + 0.10 * (50.0 / 100.0)
            + density_bonus
            + cost_eff_bonus;

        assert!((c.fitness() - (base + 0.2)).abs() < 1e-9);
    }

    #[test]
    fn test_no_dense_bonus_below_threshold() {
        let parts: Vec<Component> = (1..=19).map(|i| part(i, 10.0, 0.85, 2.0)).collect();
        let c = Chromosome::with_components(parts.iter(), CircuitConstraints::default());
        let with_one_more: Vec<Component> = (1..=20).map(|i| part(i, 10.0, 0.85, 2.0)).collect();
        let d = Chromosome::with_components(with_one_more.iter(), CircuitConstraints::default());

        // One extra identical part moves every term a little, the bonus adds 0.2.
        assert!(d.evaluate() - c.evaluate() > 0.2);
    }

    #[test]
    fn test_free_parts_saturate_cost_efficiency_bonus() {
        let free = part(1, 0.0, 0.9, 10.0);
        let c = Chromosome::with_components([&free], CircuitConstraints::default());

        let expected = 0.35 * (1.0 / 50.0) + 0.30 * 0.9 + 0.0 + 0.10 * 0.1 + (0.1 / 5.0) + 0.15;
        assert!((c.evaluate() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let a = part(1, 10.0, 0.9, 1.0);
        let c = Chromosome::with_components([&a], CircuitConstraints::default());
        let text = c.to_string();
        assert!(text.starts_with("Circuit[components=1, cost=10.00"));
        assert!(text.ends_with("feasible=true]"));
    }
}
