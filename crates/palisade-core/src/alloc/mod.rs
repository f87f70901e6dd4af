//! Collections used across the toolkit.
//!
//! - `HashMap`/`HashSet` backed by AHash
//! - [`SparseSet`], a generational arena

pub mod sparse_set;

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
pub use sparse_set::{IndexSlot, SparseSet};
