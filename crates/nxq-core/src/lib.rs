//! Core types and loading for Nx dependency graphs.
//!
//! Provides the graph data model ([`graph::DepGraph`]), the derived lookup
//! indexes ([`index::GraphIndex`]), snapshot parsing for `nx graph --file`
//! output, and layered configuration.

pub mod config;
pub mod graph;
pub mod index;
pub mod snapshot;
