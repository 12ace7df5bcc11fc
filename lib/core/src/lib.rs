//! # sparsegraph Core
//!
//! Core library for sparsegraph.
//!
//! - [`SparseMatrix`] - Sparse weight store addressed by `(row, column)`
//! - [`NodeRegistry`] - Node key to dense id mapping, ids never reused
//! - [`Graph`] - Directed, weighted graph over the two
//! - DOT export via [`Graph::export_text`] and [`Graph::to_dot`]
//!
//! ## Example
//!
//! ```rust
//! use sparsegraph_core::Graph;
//!
//! let mut g: Graph<String, i64> = Graph::new();
//! g.add_node("a".to_string()).unwrap();
//! g.add_node("b".to_string()).unwrap();
//! g.add_edge(&"a".to_string(), &"b".to_string(), 5).unwrap();
//!
//! assert!(g.to_dot().contains("node0 -> node1 [label=5]"));
//! ```

pub mod error;
pub mod matrix;
pub mod registry;
pub mod graph;
pub mod export;

pub use error::{Error, Result};
pub use matrix::SparseMatrix;
pub use registry::{NodeId, NodeRegistry};
pub use graph::{Graph, Weight};
