//! # Component
//!
//! A selectable part from the catalog. Components are immutable once built and
//! are compared, hashed and ordered by identifier alone: two components with the
//! same id are the same part, whatever their other attributes say.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable identifier of a catalog component.
pub type ComponentId = u32;

/// A catalog entry: identity, category label, cost, efficiency and footprint.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Component {
    id: ComponentId,
    category: String,
    cost: f64,
    efficiency: f64,
    size: f64,
}

impl Component {
    /// Creates a new component.
    ///
    /// `cost` and `size` are expected to be non-negative and `efficiency` to lie
    /// in `[0, 1]`; the catalog is trusted, so nothing is checked here.
    pub fn new<S: Into<String>>(
        id: ComponentId,
        category: S,
        cost: f64,
        efficiency: f64,
        size: f64,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            cost,
            efficiency,
            size,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the category group, the part of the label before the first `_`.
    ///
    /// `Sensor_Temperatura` belongs to `Sensor`; a label without an underscore is
    /// its own group.
    pub fn category_group(&self) -> &str {
        self.category
            .split_once('_')
            .map_or(self.category.as_str(), |(group, _)| group)
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns `true` when every numeric attribute is finite and within its
    /// documented range.
    pub fn is_well_formed(&self) -> bool {
        self.cost.is_finite()
            && self.cost >= 0.0
            && self.size.is_finite()
            && self.size >= 0.0
            && (0.0..=1.0).contains(&self.efficiency)
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Component {}

impl Hash for Component {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Component[id={}, category={}, cost={:.2}, efficiency={:.2}, size={:.2}]",
            self.id, self.category, self.cost, self.efficiency, self.size
        )
    }
}
