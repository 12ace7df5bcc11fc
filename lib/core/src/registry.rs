// Node identity registry - key <-> dense index, indices are never recycled
use crate::{Error, Result};
use ahash::AHashMap;
use std::fmt::Display;
use std::hash::Hash;

pub type NodeId = usize;

/// Maps node keys to dense, monotonically assigned ids.
///
/// Ids start at 0 and grow by one per [`NodeRegistry::add`]. Removing a key
/// orphans its id for good; the next key always gets a fresh, larger id.
#[derive(Debug, Clone)]
pub struct NodeRegistry<K> {
    ids: AHashMap<K, NodeId>,
    next_id: NodeId,
}

impl<K> Default for NodeRegistry<K> {
    fn default() -> Self {
        Self {
            ids: AHashMap::new(),
            next_id: 0,
        }
    }
}

impl<K: Eq + Hash + Clone + Display> NodeRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The id the next successful `add` will hand out
    #[inline]
    pub fn next_id(&self) -> NodeId {
        self.next_id
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.ids.contains_key(key)
    }

    pub fn id_of(&self, key: &K) -> Result<NodeId> {
        self.ids
            .get(key)
            .copied()
            .ok_or_else(|| Error::NodeNotFound(key.to_string()))
    }

    pub fn add(&mut self, key: K) -> Result<NodeId> {
        if self.ids.contains_key(&key) {
            return Err(Error::DuplicateNode(key.to_string()));
        }
        let id = self.next_id;
        self.ids.insert(key, id);
        self.next_id += 1;
        Ok(id)
    }

    pub fn remove(&mut self, key: &K) -> Result<NodeId> {
        self.ids
            .remove(key)
            .ok_or_else(|| Error::NodeNotFound(key.to_string()))
    }

    /// Live `(key, id)` pairs in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (&K, NodeId)> + '_ {
        let mut entries: Vec<(&K, NodeId)> = self.ids.iter().map(|(k, id)| (k, *id)).collect();
        entries.sort_unstable_by_key(|(_, id)| *id);
        entries.into_iter()
    }
}
