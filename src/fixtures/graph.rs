//! Weighted directed graph fixtures
//!
//! Vertices are `0..N-1`. Both representations are read-only inputs for
//! graph algorithms that live elsewhere.

use std::fmt;

use itertools::Itertools;

/// Directed edge to `to` with a signed integer weight; negative weights are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    pub to: usize,
    pub weight: i32,
}

impl GraphEdge {
    pub const fn new(to: usize, weight: i32) -> Self {
        Self { to, weight }
    }
}

const fn edge(to: usize, weight: i32) -> GraphEdge {
    GraphEdge::new(to, weight)
}

/// Outgoing edges per source vertex, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedAdjacencyList {
    rows: Vec<Vec<GraphEdge>>,
}

impl WeightedAdjacencyList {
    pub fn new(rows: Vec<Vec<GraphEdge>>) -> Self {
        Self { rows }
    }

    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    /// Outgoing edges of `v`; empty for an unknown vertex.
    pub fn edges(&self, v: usize) -> &[GraphEdge] {
        self.rows.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Weight of the first edge `from -> to`, if any.
    pub fn weight(&self, from: usize, to: usize) -> Option<i32> {
        self.edges(from)
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.weight)
    }

    /// Dense form of the same graph. Where a row repeats a target, the first edge wins.
    pub fn to_matrix(&self) -> WeightedAdjacencyMatrix {
        let n = self.vertex_count();
        let mut cells = vec![vec![None; n]; n];
        for (from, row) in self.rows.iter().enumerate() {
            for e in row.iter().rev() {
                if let Some(cell) = cells[from].get_mut(e.to) {
                    *cell = Some(e.weight);
                }
            }
        }
        WeightedAdjacencyMatrix { cells }
    }
}

impl fmt::Display for WeightedAdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, row) in self.rows.iter().enumerate() {
            let edges = row
                .iter()
                .map(|e| format!("{}({})", e.to, e.weight))
                .join(", ");
            writeln!(f, "{v}: [{edges}]")?;
        }
        Ok(())
    }
}

/// N×N grid of edge weights, `None` meaning "no edge".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedAdjacencyMatrix {
    cells: Vec<Vec<Option<i32>>>,
}

impl WeightedAdjacencyMatrix {
    /// Build from a raw weight grid where `0` means "no edge".
    ///
    /// A genuine zero-weight edge cannot be written this way; use
    /// [`WeightedAdjacencyMatrix::from_cells`] for that.
    pub fn from_raw<const N: usize>(raw: &[[i32; N]; N]) -> Self {
        let cells: Vec<Vec<Option<i32>>> = raw
            .iter()
            .map(|row| row.iter().map(|&w| (w != 0).then_some(w)).collect())
            .collect();
        Self { cells }
    }

    /// Build from explicit cells. Rows shorter than the vertex count are padded with `None`.
    pub fn from_cells(mut cells: Vec<Vec<Option<i32>>>) -> Self {
        let n = cells.len();
        for row in &mut cells {
            row.resize(n, None);
        }
        Self { cells }
    }

    pub fn vertex_count(&self) -> usize {
        self.cells.len()
    }

    pub fn weight(&self, from: usize, to: usize) -> Option<i32> {
        self.cells.get(from)?.get(to).copied().flatten()
    }

    /// Outgoing edges of `v` in column order.
    pub fn edges(&self, v: usize) -> Vec<GraphEdge> {
        self.cells
            .get(v)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(to, w)| w.map(|weight| edge(to, weight)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}

impl fmt::Display for WeightedAdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line = row
                .iter()
                .map(|c| match c {
                    Some(w) => format!("{w:>3}"),
                    None => "  .".to_string(),
                })
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Undirected-looking graph of 7 vertices; every edge has a reverse counterpart
/// except `5 -> 2` (weight 18).
pub fn adj_list1() -> WeightedAdjacencyList {
    WeightedAdjacencyList::new(vec![
        vec![edge(1, 3), edge(2, 1)],
        vec![edge(0, 3), edge(2, 4), edge(4, 1)],
        vec![edge(1, 4), edge(3, 7), edge(0, 1)],
        vec![edge(2, 7), edge(4, 5), edge(6, 1)],
        vec![edge(1, 1), edge(3, 5), edge(5, 2)],
        vec![edge(6, 1), edge(4, 2), edge(2, 18)],
        vec![edge(3, 1), edge(5, 1)],
    ])
}

/// Directed graph of 7 vertices; vertex 3 is a sink.
pub fn adj_list2() -> WeightedAdjacencyList {
    WeightedAdjacencyList::new(vec![
        vec![edge(1, 3), edge(2, 1)],
        vec![edge(4, 1)],
        vec![edge(3, 7)],
        vec![],
        vec![edge(1, 1), edge(3, 5), edge(5, 2)],
        vec![edge(2, 18), edge(6, 1)],
        vec![edge(3, 1)],
    ])
}

const ADJ_MATRIX_1: [[i32; 7]; 7] = [
    [0, 3, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 0, 0],
    [0, 0, 7, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 1, 0, 5, 0, 2, 0],
    [0, 0, 18, 0, 0, 0, 1],
    [0, 0, 0, 1, 0, 0, 1],
];

/// Dense 7×7 fixture. Close to `adj_list2` but not identical: it has
/// self-loops at 2 and 6 and no `2 -> 3` edge.
pub fn adj_matrix1() -> WeightedAdjacencyMatrix {
    WeightedAdjacencyMatrix::from_raw(&ADJ_MATRIX_1)
}
