use std::collections::VecDeque;
use std::hash::Hash;
use std::iter::FusedIterator;

use ahash::{AHashSet, RandomState};
use indexmap::{IndexMap, IndexSet};

use crate::adjacency::AdjacencyGraph;

/// A breadth-first traversal yielding each reached vertex with its level, the
/// number of edges on a shortest path from the source.
///
/// Vertices are marked as discovered when first seen as a successor, so each
/// one is enqueued at most once and the level it is reported with is minimal.
#[derive(Clone)]
pub struct Bfs<'a, V> {
    graph: &'a AdjacencyGraph<V>,
    queue: VecDeque<(&'a V, usize)>,
    discovered: AHashSet<&'a V>,
}

impl<'a, V: Hash + Eq> Bfs<'a, V> {
    pub fn new(graph: &'a AdjacencyGraph<V>, source: &'a V) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((source, 0));
        let mut discovered = AHashSet::new();
        discovered.insert(source);
        Bfs {
            graph,
            queue,
            discovered,
        }
    }
}

impl<'a, V: Hash + Eq> Iterator for Bfs<'a, V> {
    type Item = (&'a V, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        let (vertex, level) = self.queue.pop_front()?;
        for next in graph.connected_vertices(vertex) {
            if self.discovered.insert(next) {
                self.queue.push_back((next, level + 1));
            }
        }
        Some((vertex, level))
    }
}

impl<V: Hash + Eq> FusedIterator for Bfs<'_, V> {}

/// A depth-first traversal driven by an explicit stack.
///
/// A vertex is recorded when it is first popped. Successors are pushed in
/// insertion order unless already recorded, so the last-inserted successor is
/// expanded first and a vertex may sit on the stack several times before its
/// first pop. Later pops of a recorded vertex are skipped.
#[derive(Clone)]
pub struct Dfs<'a, V> {
    graph: &'a AdjacencyGraph<V>,
    stack: Vec<&'a V>,
    visited: AHashSet<&'a V>,
}

impl<'a, V: Hash + Eq> Dfs<'a, V> {
    pub fn new(graph: &'a AdjacencyGraph<V>, source: &'a V) -> Self {
        Dfs {
            graph,
            stack: vec![source],
            visited: AHashSet::new(),
        }
    }
}

impl<'a, V: Hash + Eq> Iterator for Dfs<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        loop {
            let vertex = self.stack.pop()?;
            if !self.visited.insert(vertex) {
                continue;
            }
            for next in graph.connected_vertices(vertex) {
                if !self.visited.contains(next) {
                    self.stack.push(next);
                }
            }
            return Some(vertex);
        }
    }
}

impl<V: Hash + Eq> FusedIterator for Dfs<'_, V> {}

impl<V: Hash + Eq> AdjacencyGraph<V> {
    pub fn bfs<'a>(&'a self, source: &'a V) -> Bfs<'a, V> {
        Bfs::new(self, source)
    }

    pub fn dfs<'a>(&'a self, source: &'a V) -> Dfs<'a, V> {
        Dfs::new(self, source)
    }

    /// Hop distance from `source` to every vertex reachable from it, in
    /// breadth-first order. `source` is always reported at level 0, even when
    /// it is not present in the graph.
    pub fn levels_from<'a>(&'a self, source: &'a V) -> IndexMap<&'a V, usize, RandomState> {
        let levels: IndexMap<_, _, RandomState> = self.bfs(source).collect();
        log::trace!("bfs reached {} vertices", levels.len());
        levels
    }

    pub fn bfs_order<'a>(&'a self, source: &'a V) -> IndexSet<&'a V, RandomState> {
        let order: IndexSet<_, RandomState> = self.bfs(source).map(|(v, _)| v).collect();
        log::trace!("bfs reached {} vertices", order.len());
        order
    }

    pub fn dfs_order<'a>(&'a self, source: &'a V) -> IndexSet<&'a V, RandomState> {
        let order: IndexSet<_, RandomState> = self.dfs(source).collect();
        log::trace!("dfs reached {} vertices", order.len());
        order
    }
}
