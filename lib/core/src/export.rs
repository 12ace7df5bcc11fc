//! Graphviz (DOT) export.
//!
//! Output layout:
//!
//! ```text
//! strict digraph {
//! node0 [label="a"]
//! node0 -> node1 [label=5]
//! node1 [label="b"]
//! }
//! ```
//!
//! Each node declaration is followed by that node's outgoing edges. Nodes
//! come out in id order and edges in target id order.

use crate::graph::{Graph, Weight};
use std::fmt::{self, Display, Write as _};
use std::hash::Hash;

impl<K, W> Graph<K, W>
where
    K: Eq + Hash + Clone + Display,
    W: Weight,
{
    /// Write the DOT description of the graph to `sink`.
    pub fn export_text<S: fmt::Write + ?Sized>(&self, sink: &mut S) -> fmt::Result {
        writeln!(sink, "strict digraph {{")?;
        for (key, id) in self.nodes() {
            writeln!(sink, "node{} [label=\"{}\"]", id, Escaped(key))?;
            for (to, weight) in self.matrix().row(id) {
                writeln!(sink, "node{} -> node{} [label={}]", id, to, weight)?;
            }
        }
        writeln!(sink, "}}")
    }

    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.export_text(&mut out);
        out
    }
}

/// Renders a label with `"` and `\` backslash-escaped
struct Escaped<'a, T>(&'a T);

impl<T: Display> Display for Escaped<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        for c in text.chars() {
            if c == '"' || c == '\\' {
                f.write_char('\\')?;
            }
            f.write_char(c)?;
        }
        Ok(())
    }
}
