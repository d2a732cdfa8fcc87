//! Named fixtures for the CLI

use std::fmt;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::FixtureSettings;
use crate::fixtures::{adj_list1, adj_list2, adj_matrix1, tree1, tree2};
use crate::tree_traits::TreeNodeConvert;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    AdjList1,
    AdjList2,
    AdjMatrix1,
    Tree1,
    Tree2,
}

pub const GRAPH_FIXTURES: [Fixture; 3] = [Fixture::AdjList1, Fixture::AdjList2, Fixture::AdjMatrix1];
pub const TREE_FIXTURES: [Fixture; 2] = [Fixture::Tree1, Fixture::Tree2];

impl Fixture {
    pub fn name(&self) -> &'static str {
        match self {
            Fixture::AdjList1 => "adj-list1",
            Fixture::AdjList2 => "adj-list2",
            Fixture::AdjMatrix1 => "adj-matrix1",
            Fixture::Tree1 => "tree1",
            Fixture::Tree2 => "tree2",
        }
    }

    /// Find `name` among `candidates`.
    pub fn lookup(name: &str, candidates: &[Fixture]) -> ApplicationResult<Self> {
        candidates
            .iter()
            .copied()
            .find(|f| f.name() == name)
            .ok_or_else(|| ApplicationError::UnknownFixture(name.to_string()))
    }

    /// Printable form of the fixture data.
    pub fn render(&self, settings: &FixtureSettings) -> String {
        debug!("render: {}", self);
        match self {
            Fixture::AdjList1 => adj_list1().to_string(),
            Fixture::AdjList2 => adj_list2().to_string(),
            Fixture::AdjMatrix1 => adj_matrix1().to_string(),
            Fixture::Tree1 => tree1()
                .to_tree_string_with(settings.render_missing)
                .to_string(),
            Fixture::Tree2 => tree2()
                .to_tree_string_with(settings.render_missing)
                .to_string(),
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
