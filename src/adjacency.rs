//! # Adjacency-list graph
//!
//! [`AdjacencyGraph`] maps every present vertex to the [`NeighborSet`] of
//! vertices it has an outgoing edge to. Neighbour sets keep insertion order, so
//! traversals expand the first-inserted neighbour first.
//!
//! Mutations validate their arguments before touching the store and report
//! failures through [`GraphError`]. Queries are total: asking about a vertex
//! that was never added yields `false` or an empty result.

use std::fmt::{self, Display};
use std::hash::Hash;
use std::iter::FusedIterator;

use ahash::RandomState;
use error::{Endpoint, GraphError};
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;

pub mod algorithms;
pub mod builder;
pub mod error;

/// The insertion-ordered set of direct successors of a vertex.
pub type NeighborSet<V> = IndexSet<V, RandomState>;

/// A mutable, unweighted graph stored as an adjacency list.
///
/// Edges are directed: `(u, v)` exists iff `v` is in the neighbour set of `u`.
/// Self-loops are allowed. Once added, a vertex stays in the graph.
#[derive(Clone, Debug)]
pub struct AdjacencyGraph<V> {
    adjacency: IndexMap<V, NeighborSet<V>, RandomState>,
}

impl<V> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        AdjacencyGraph {
            adjacency: IndexMap::default(),
        }
    }
}

impl<V> AdjacencyGraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n_vertices: usize) -> Self {
        AdjacencyGraph {
            adjacency: IndexMap::with_capacity_and_hasher(n_vertices, RandomState::new()),
        }
    }

    pub fn n_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges. A bidirectional pair counts twice.
    pub fn n_edges(&self) -> usize {
        self.adjacency.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All present vertices, in the order they were added.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Every directed edge as a `(source, target)` pair, grouped by source.
    pub fn iter_edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(source, targets)| targets.iter().map(move |target| (source, target)))
    }

    pub fn all_edges(&self) -> Vec<(V, V)>
    where
        V: Clone,
    {
        self.iter_edges()
            .map(|(s, t)| (s.clone(), t.clone()))
            .collect()
    }
}

impl<V: Hash + Eq> AdjacencyGraph<V> {
    /// Adds `vertex` with no outgoing edges.
    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError<V>> {
        if self.adjacency.contains_key(&vertex) {
            log::debug!("rejected duplicate vertex");
            return Err(GraphError::DuplicateVertex(vertex));
        }
        self.adjacency.insert(vertex, NeighborSet::default());
        log::trace!("added vertex #{}", self.adjacency.len() - 1);
        Ok(())
    }

    /// Adds the edge `source -> target`, and `target -> source` as well when
    /// `bidirectional` is set. Adding an edge that already exists does nothing.
    pub fn add_edge(
        &mut self,
        source: V,
        target: V,
        bidirectional: bool,
    ) -> Result<(), GraphError<V>> {
        let (s, t) = match self.locate(&source, &target) {
            Ok(indices) => indices,
            Err(Endpoint::Source) => return Err(Self::not_found(source, Endpoint::Source)),
            Err(Endpoint::Target) => return Err(Self::not_found(target, Endpoint::Target)),
        };

        self.adjacency[s].insert(target);
        if bidirectional {
            self.adjacency[t].insert(source);
        }
        log::trace!("added edge #{s} -> #{t} (bidirectional: {bidirectional})");
        Ok(())
    }

    /// Removes the edge `source -> target`, and `target -> source` as well when
    /// `bidirectional` is set. Removing a missing edge is not an error, but both
    /// endpoints must be present.
    pub fn delete_edge(
        &mut self,
        source: &V,
        target: &V,
        bidirectional: bool,
    ) -> Result<(), GraphError<V>>
    where
        V: Clone,
    {
        let (s, t) = self.locate(source, target).map_err(|endpoint| {
            let vertex = match endpoint {
                Endpoint::Source => source.clone(),
                Endpoint::Target => target.clone(),
            };
            Self::not_found(vertex, endpoint)
        })?;

        self.adjacency[s].shift_remove(target);
        if bidirectional {
            self.adjacency[t].shift_remove(source);
        }
        log::trace!("deleted edge #{s} -> #{t} (bidirectional: {bidirectional})");
        Ok(())
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// `false` whenever either endpoint is absent.
    pub fn contains_edge(&self, source: &V, target: &V) -> bool {
        self.adjacency.contains_key(target)
            && self
                .adjacency
                .get(source)
                .is_some_and(|targets| targets.contains(target))
    }

    /// The direct successors of `vertex` in insertion order. Empty when
    /// `vertex` is not present.
    pub fn connected_vertices(&self, vertex: &V) -> Neighbors<'_, V> {
        Neighbors {
            inner: self.adjacency.get(vertex).map(IndexSet::iter),
        }
    }

    pub fn neighbor_set(&self, vertex: &V) -> Option<&NeighborSet<V>> {
        self.adjacency.get(vertex)
    }

    pub fn out_degree(&self, vertex: &V) -> usize {
        self.adjacency.get(vertex).map_or(0, IndexSet::len)
    }

    /// Number of vertices with an edge pointing to `vertex`, itself included
    /// when it carries a self-loop.
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.adjacency
            .values()
            .filter(|targets| targets.contains(vertex))
            .count()
    }

    /// Store positions of both endpoints, or the first one that is missing.
    fn locate(&self, source: &V, target: &V) -> Result<(usize, usize), Endpoint> {
        let s = self
            .adjacency
            .get_index_of(source)
            .ok_or(Endpoint::Source)?;
        let t = self
            .adjacency
            .get_index_of(target)
            .ok_or(Endpoint::Target)?;
        Ok((s, t))
    }

    fn not_found(vertex: V, endpoint: Endpoint) -> GraphError<V> {
        log::debug!("rejected edge operation: {endpoint} vertex is not present");
        GraphError::VertexNotFound { vertex, endpoint }
    }
}

/// Iterator over the successors of one vertex, see
/// [`AdjacencyGraph::connected_vertices`].
pub struct Neighbors<'a, V> {
    inner: Option<indexmap::set::Iter<'a, V>>,
}

impl<V> Clone for Neighbors<'_, V> {
    fn clone(&self) -> Self {
        Neighbors {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for Neighbors<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(iter) => iter.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<V> DoubleEndedIterator for Neighbors<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl<V> ExactSizeIterator for Neighbors<'_, V> {}

impl<V> FusedIterator for Neighbors<'_, V> {}

// Display
impl<V: Display> AdjacencyGraph<V> {
    /// Graphviz rendering: every vertex in insertion order, then every edge
    /// grouped by source. Meant for diagnostics, not as an exchange format.
    pub fn dot(&self) -> String {
        Dot { graph: self }.to_string()
    }
}

struct Dot<'a, V> {
    graph: &'a AdjacencyGraph<V>,
}

impl<V: Display> Display for Dot<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        for v in self.graph.vertices() {
            writeln!(f, "  \"{v}\";")?;
        }
        for (s, t) in self.graph.iter_edges() {
            writeln!(f, "  \"{s}\" -> \"{t}\";")?;
        }
        write!(f, "}}")
    }
}

impl<V: Display> Display for AdjacencyGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, targets) in &self.adjacency {
            writeln!(f, "{v}: [{}]", targets.iter().join(", "))?;
        }
        Ok(())
    }
}
