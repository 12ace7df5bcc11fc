// Graphviz file output for the `graphviz` command
use crate::Result;
use sparsegraph_core::{Graph, Weight};
use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Create (or truncate) `path` and write the DOT description of `graph` into it.
pub fn save_dot<K, W, P>(graph: &Graph<K, W>, path: P) -> Result<()>
where
    K: Eq + Hash + Clone + Display,
    W: Weight,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(graph.to_dot().as_bytes())?;
    writer.flush()?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph exported"
    );
    Ok(())
}
