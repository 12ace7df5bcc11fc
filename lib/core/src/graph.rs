// Directed, weighted graph over a sparse adjacency matrix
use crate::matrix::SparseMatrix;
use crate::registry::{NodeId, NodeRegistry};
use crate::{Error, Result};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tracing::debug;

/// Edge weight: any small numeric value that can be copied and printed.
pub trait Weight: Copy + PartialEq + Debug + Display {}

impl<T: Copy + PartialEq + Debug + Display> Weight for T {}

/// A graph keyed by `K` with edge weights `W`.
///
/// Every edge from `a` to `b` lives in cell `(id(a), id(b))` of the matrix,
/// so each ordered pair holds at most one edge. Self-loops are allowed.
/// Failed calls leave both the registry and the matrix untouched.
#[derive(Debug, Clone)]
pub struct Graph<K, W> {
    nodes: NodeRegistry<K>,
    edges: SparseMatrix<W>,
}

impl<K, W> Default for Graph<K, W> {
    fn default() -> Self {
        Self {
            nodes: NodeRegistry::default(),
            edges: SparseMatrix::new(),
        }
    }
}

impl<K, W> Graph<K, W>
where
    K: Eq + Hash + Clone + Display,
    W: Weight,
{
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, key: &K) -> bool {
        self.nodes.contains(key)
    }

    pub fn node_id(&self, key: &K) -> Result<NodeId> {
        self.nodes.id_of(key)
    }

    /// Live nodes and their ids, lowest id first
    pub fn nodes(&self) -> impl Iterator<Item = (&K, NodeId)> + '_ {
        self.nodes.iter()
    }

    /// Read-only view of the adjacency matrix
    pub fn matrix(&self) -> &SparseMatrix<W> {
        &self.edges
    }

    pub fn add_node(&mut self, key: K) -> Result<NodeId> {
        let id = self.nodes.add(key)?;
        debug!(id, "node added");
        Ok(id)
    }

    /// Remove a node together with every edge into or out of it.
    pub fn remove_node(&mut self, key: &K) -> Result<NodeId> {
        let id = self.nodes.remove(key)?;
        let outgoing = self.edges.clear_row(id);
        let incoming = self.edges.clear_column(id);
        debug!(id, outgoing, incoming, "node removed");
        Ok(id)
    }

    /// Add or replace the edge `src -> dest`.
    pub fn add_edge(&mut self, src: &K, dest: &K, weight: W) -> Result<()> {
        let (from, to) = self.endpoints(src, dest)?;
        self.edges.set(from, to, weight);
        debug!(from, to, %weight, "edge set");
        Ok(())
    }

    /// Reset the edge `src -> dest`. Removing an edge that is not there is a no-op.
    pub fn remove_edge(&mut self, src: &K, dest: &K) -> Result<Option<W>> {
        let (from, to) = self.endpoints(src, dest)?;
        let old = self.edges.reset(from, to);
        debug!(from, to, existed = old.is_some(), "edge reset");
        Ok(old)
    }

    pub fn edge_weight(&self, src: &K, dest: &K) -> Result<Option<W>> {
        let (from, to) = self.endpoints(src, dest)?;
        Ok(self.edges.get(from, to))
    }

    /// Outgoing edges of `key` as `(target id, weight)`
    pub fn successors(&self, key: &K) -> Result<impl Iterator<Item = (NodeId, W)> + '_> {
        let id = self.nodes.id_of(key)?;
        Ok(self.edges.row(id).map(|(to, w)| (to, *w)))
    }

    fn endpoints(&self, src: &K, dest: &K) -> Result<(NodeId, NodeId)> {
        match (self.nodes.id_of(src), self.nodes.id_of(dest)) {
            (Ok(from), Ok(to)) => Ok((from, to)),
            _ => Err(Error::EdgeBetweenNonexistentNodes {
                src: src.to_string(),
                dest: dest.to_string(),
            }),
        }
    }
}
