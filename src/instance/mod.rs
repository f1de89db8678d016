//! Items and problem instances.
//!
//! A [`ProblemInstance`] is built once per solve and is immutable
//! afterwards, apart from the one-way transition to density order via
//! [`ProblemInstance::mark_sorted`]. Greedy and branch-and-bound require
//! that order; the dynamic-programming strategies do not care about it.

mod builder;
mod item;

pub use builder::{build, sort_by_density, InstanceBuilder, ProblemInstance, WEIGHT_TOLERANCE};
pub use item::{Item, ItemSpec};
