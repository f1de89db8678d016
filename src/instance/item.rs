//! Knapsack items.

use serde::{Deserialize, Serialize};

/// Input description of one item, as supplied by a driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    /// Stable identity, unique within an instance.
    pub index: usize,
    pub value: f64,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ItemSpec {
    pub fn new(index: usize, value: f64, weight: f64) -> Self {
        Self {
            index,
            value,
            weight,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// One candidate item.
///
/// The value density is derived once at construction and used as the
/// ordering key by the greedy and branch-and-bound strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    value: f64,
    weight: f64,
    index: usize,
    name: Option<String>,
    density: f64,
}

impl Item {
    /// Creates an item. A zero weight yields density 0.
    pub fn new(index: usize, value: f64, weight: f64) -> Self {
        let density = if weight == 0.0 { 0.0 } else { value / weight };
        Self {
            value,
            weight,
            index,
            name: None,
            density,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Value per unit of weight.
    pub fn density(&self) -> f64 {
        self.density
    }
}

impl From<ItemSpec> for Item {
    fn from(spec: ItemSpec) -> Self {
        let item = Item::new(spec.index, spec.value, spec.weight);
        match spec.name {
            Some(name) => item.with_name(name),
            None => item,
        }
    }
}
