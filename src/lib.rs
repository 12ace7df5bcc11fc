//! # sparsegraph
//!
//! A directed, weighted graph stored as a sparse adjacency matrix, with an
//! interactive shell and Graphviz export.
//!
//! ## Quick Start
//!
//! ### As a Shell
//!
//! ```bash
//! sparsegraph
//! graph> v a
//! graph> v b
//! graph> e a->b 5
//! graph> g graph.gv
//! graph> q
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use sparsegraph::prelude::*;
//!
//! let mut g: Graph<&str, i64> = Graph::new();
//! g.add_node("a").unwrap();
//! g.add_node("b").unwrap();
//! g.add_edge(&"a", &"b", 5).unwrap();
//!
//! let dot = g.to_dot();
//! assert!(dot.starts_with("strict digraph {"));
//! ```
//!
//! ## Crate Structure
//!
//! - `sparsegraph-core` - Node registry, sparse weight store, graph, DOT export
//! - `sparsegraph-shell` - Command grammar and interactive session

// Re-export core types
pub use sparsegraph_core::{
    Graph, Weight, NodeId, NodeRegistry, SparseMatrix,
    Error, Result,
};

// Re-export shell
pub use sparsegraph_shell::{Command, Flow, Shell, ShellConfig, ShellError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Graph, Weight, NodeId, SparseMatrix,
        Error, Result,
        Shell, ShellConfig, Flow,
    };
}
