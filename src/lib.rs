//! # Adjgraph
//!
//! Adjgraph is a small Rust library for unweighted graphs stored as adjacency
//! lists: every vertex maps to the insertion-ordered set of vertices it points
//! to. Edges are directed, and undirected edges are expressed as a pair of
//! directed ones inserted or removed together.
//!
//! Besides insertion, deletion and adjacency queries, the graph offers
//! breadth-first traversal (with hop-distance levels) and depth-first
//! traversal from any source vertex.
//!
//! ```
//! use adjgraph::AdjacencyGraph;
//!
//! let mut graph = AdjacencyGraph::new();
//! for v in ["A", "B", "C", "D"] {
//!     graph.add_vertex(v).unwrap();
//! }
//! graph.add_edge("A", "B", false).unwrap();
//! graph.add_edge("A", "C", false).unwrap();
//! graph.add_edge("B", "D", false).unwrap();
//! graph.add_edge("C", "D", false).unwrap();
//!
//! let levels = graph.levels_from(&"A");
//! assert_eq!(levels[&"D"], 2);
//! assert_eq!(graph.n_edges(), 4);
//! ```

pub mod adjacency;

pub use adjacency::{
    builder::AdjacencyGraphBuilder,
    error::{Endpoint, GraphError},
    AdjacencyGraph, NeighborSet, Neighbors,
};
