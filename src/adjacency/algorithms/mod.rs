//! # Graph Algorithms for Adjacency-List Graphs
//!
//! ## Available Algorithms
//!
//! ### Traversals
//! - [`traversal`]: breadth-first traversal with hop-distance levels, and
//!   stack-based depth-first traversal
//!
//! All traversals accept any source vertex. A source that is not present in
//! the graph has no successors, so the traversal reports only the source
//! itself.

pub mod traversal;
