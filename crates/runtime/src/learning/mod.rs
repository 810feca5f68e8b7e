//! Tabular Q-learning: value table, value store and action policy.
//!
//! - [`QTable`]: two-level map state key → (action → value)
//! - [`QStore`]: owns the table, applies the TD update, persists through a
//!   [`crate::repository::TableRepository`]
//! - [`Policy`]: ε-greedy selection gated by ordered [`Heuristic`]s

pub mod policy;
pub mod store;
pub mod table;

pub use policy::{Decision, DecisionSource, Heuristic, Policy, PolicyContext};
pub use store::QStore;
pub use table::{ActionValues, QTable, TableStats};
