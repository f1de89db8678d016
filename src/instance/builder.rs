//! Problem instance construction and density ordering.

use super::item::{Item, ItemSpec};
use std::cmp::Ordering;

/// Relative slack allowed when an accumulated weight is compared to the
/// capacity. Decimal weights such as `0.1` are not exact in binary, so a
/// subset whose true weight equals the capacity may sum to slightly more.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// An immutable knapsack instance: a capacity and an ordered item list.
///
/// When [`is_density_sorted`](Self::is_density_sorted) is true the items are
/// in non-increasing density order (ties by ascending index).
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemInstance {
    capacity: f64,
    items: Vec<Item>,
    density_sorted: bool,
}

impl ProblemInstance {
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_density_sorted(&self) -> bool {
        self.density_sorted
    }

    /// Sorts the items by density and marks the instance as sorted.
    pub fn mark_sorted(&mut self) {
        if !self.density_sorted {
            let items = std::mem::take(&mut self.items);
            self.items = sort_by_density(items);
            self.density_sorted = true;
        }
    }

    /// Consuming variant of [`mark_sorted`](Self::mark_sorted).
    pub fn into_sorted(mut self) -> Self {
        self.mark_sorted();
        self
    }

    /// Absolute slack for capacity comparisons on this instance.
    pub fn tolerance(&self) -> f64 {
        WEIGHT_TOLERANCE * self.capacity.abs().max(1.0)
    }

    /// Whether an accumulated `weight` is within the capacity.
    pub fn fits(&self, weight: f64) -> bool {
        weight <= self.capacity + self.tolerance()
    }

    /// True iff the lightest item is heavier than the capacity.
    ///
    /// An empty instance is not "too heavy"; it is covered by [`all_fit`](Self::all_fit).
    pub fn all_too_heavy(&self) -> bool {
        self.items
            .iter()
            .map(Item::weight)
            .min_by(f64::total_cmp)
            .is_some_and(|lightest| !self.fits(lightest))
    }

    /// True iff every item fits at once.
    pub fn all_fit(&self) -> bool {
        self.fits(self.total_weight())
    }

    /// Sum of all item weights.
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(Item::weight).sum()
    }
}

/// Orders items by non-increasing density, ties broken by ascending index.
pub fn sort_by_density(mut items: Vec<Item>) -> Vec<Item> {
    items.sort_by(density_order);
    items
}

fn density_order(a: &Item, b: &Item) -> Ordering {
    b.density()
        .total_cmp(&a.density())
        .then_with(|| a.index().cmp(&b.index()))
}

/// Builds a [`ProblemInstance`].
///
/// # Examples
///
/// ```
/// use knapsack_engine::instance::InstanceBuilder;
///
/// let instance = InstanceBuilder::new(6.0)
///     .item(0, 8.0, 4.0)
///     .item(1, 10.0, 5.0)
///     .density_sorted(true)
///     .build();
/// assert_eq!(instance.len(), 2);
/// assert!(instance.is_density_sorted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstanceBuilder {
    capacity: f64,
    items: Vec<Item>,
    density_sorted: bool,
}

impl InstanceBuilder {
    pub fn new(capacity: f64) -> Self {
        Self {
            capacity,
            items: Vec::new(),
            density_sorted: false,
        }
    }

    /// Appends an unnamed item.
    pub fn item(mut self, index: usize, value: f64, weight: f64) -> Self {
        self.items.push(Item::new(index, value, weight));
        self
    }

    /// Appends a named item.
    pub fn named_item(mut self, name: &str, index: usize, value: f64, weight: f64) -> Self {
        self.items.push(Item::new(index, value, weight).with_name(name));
        self
    }

    /// Appends items from driver specs, preserving their order.
    pub fn items<I>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = ItemSpec>,
    {
        self.items.extend(specs.into_iter().map(Item::from));
        self
    }

    /// Requests density ordering at build time.
    pub fn density_sorted(mut self, sorted: bool) -> Self {
        self.density_sorted = sorted;
        self
    }

    pub fn build(self) -> ProblemInstance {
        let instance = ProblemInstance {
            capacity: self.capacity,
            items: self.items,
            density_sorted: false,
        };
        if self.density_sorted {
            instance.into_sorted()
        } else {
            instance
        }
    }
}

/// Shorthand for `InstanceBuilder::new(capacity).items(specs).density_sorted(sorted).build()`.
pub fn build<I>(capacity: f64, specs: I, sorted: bool) -> ProblemInstance
where
    I: IntoIterator<Item = ItemSpec>,
{
    InstanceBuilder::new(capacity)
        .items(specs)
        .density_sorted(sorted)
        .build()
}
