//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::list::ListKind;

/// Ordered-list conformance runner and fixture viewer
#[derive(Parser, Debug)]
#[command(name = "dsakit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the conformance script against list backings
    Conform {
        /// Backing to check (default: configured default_kind)
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Print a graph fixture
    Graph {
        /// adj-list1, adj-list2 or adj-matrix1
        name: String,
    },

    /// Print a tree fixture
    Tree {
        /// tree1 or tree2
        name: String,
    },

    /// List fixture names
    Fixtures,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Show the global config file location
    Path,
}

/// `--kind` values; `all` expands to every backing.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Array,
    Linked,
    Ring,
    All,
}

impl KindArg {
    pub fn kinds(self) -> Vec<ListKind> {
        match self {
            KindArg::Array => vec![ListKind::Array],
            KindArg::Linked => vec![ListKind::Linked],
            KindArg::Ring => vec![ListKind::Ring],
            KindArg::All => ListKind::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_conform_all_with_verbosity() {
        let cli = Cli::parse_from(["dsakit", "-dd", "conform", "--kind", "all"]);
        assert_eq!(cli.debug, 2);
        match cli.command {
            Some(Commands::Conform { kind }) => {
                assert_eq!(kind.map(KindArg::kinds), Some(ListKind::ALL.to_vec()))
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
