//! Static fixture data for data-structure exercises
//!
//! Plain data with no behaviour beyond shape accessors; algorithms that
//! consume these live elsewhere.

pub mod graph;
pub mod point;
pub mod tree;

pub use graph::{
    adj_list1, adj_list2, adj_matrix1, GraphEdge, WeightedAdjacencyList, WeightedAdjacencyMatrix,
};
pub use point::Point;
pub use tree::{tree1, tree2, BinaryNode};
