//! Query engine for Nx dependency graphs.
//!
//! [`TraversalEngine`] owns a loaded [`nxq_core::graph::DepGraph`] and its
//! [`nxq_core::index::GraphIndex`], and answers closure (`closure`),
//! reachability (`reach`), distance-tier (`levels`), and simple-path
//! (`paths`) questions. Every query is read-only and keeps its visited state
//! local to the call, so one engine can be shared across threads.

pub mod closure;
pub mod engine;
pub mod levels;
pub mod paths;
pub mod reach;

pub use engine::{TraversalEngine, TypeGroups, TypeSets};
pub use levels::{Levels, TypedLevels};
pub use paths::{PathBudget, PathSearch, SimplePath};
