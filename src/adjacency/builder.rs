use std::hash::Hash;

use super::{error::GraphError, AdjacencyGraph};

#[derive(Clone, Debug)]
struct EdgeBuilder<V> {
    source: V,
    target: V,
    bidirectional: bool,
}

/// Collects vertices and edges and replays them, in insertion order, into a
/// fresh [`AdjacencyGraph`].
///
/// Nothing is validated until [`build`](Self::build), which returns the first
/// error the graph reports.
#[derive(Clone, Debug)]
pub struct AdjacencyGraphBuilder<V> {
    vertices: Vec<V>,
    edges: Vec<EdgeBuilder<V>>,
}

impl<V> AdjacencyGraphBuilder<V> {
    pub fn new() -> Self {
        AdjacencyGraphBuilder {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_vertex(&mut self, vertex: V) {
        self.vertices.push(vertex);
    }

    pub fn add_edge(&mut self, source: V, target: V, bidirectional: bool) {
        self.edges.push(EdgeBuilder {
            source,
            target,
            bidirectional,
        });
    }

    pub fn vertex(mut self, vertex: V) -> Self {
        self.add_vertex(vertex);
        self
    }

    pub fn vertices(mut self, vertices: impl IntoIterator<Item = V>) -> Self {
        self.vertices.extend(vertices);
        self
    }

    pub fn edge(mut self, source: V, target: V, bidirectional: bool) -> Self {
        self.add_edge(source, target, bidirectional);
        self
    }
}

impl<V: Hash + Eq> AdjacencyGraphBuilder<V> {
    pub fn build(self) -> Result<AdjacencyGraph<V>, GraphError<V>> {
        let mut graph = AdjacencyGraph::with_capacity(self.vertices.len());
        for v in self.vertices {
            graph.add_vertex(v)?;
        }
        for e in self.edges {
            graph.add_edge(e.source, e.target, e.bidirectional)?;
        }
        Ok(graph)
    }
}

impl<V> Default for AdjacencyGraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
