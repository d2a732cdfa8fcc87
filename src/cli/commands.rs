use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{check_kinds, ApplicationError, Fixture, GRAPH_FIXTURES, TREE_FIXTURES};
use crate::cli::args::{Cli, Commands, ConfigCommands, KindArg};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::list::ListKind;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Conform { kind }) => _conform(*kind, &settings),
        Some(Commands::Graph { name }) => _show(name, &GRAPH_FIXTURES, &settings),
        Some(Commands::Tree { name }) => _show(name, &TREE_FIXTURES, &settings),
        Some(Commands::Fixtures) => _fixtures(),
        Some(Commands::Config { command }) => _config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Kinds to check: explicit `--kind` wins over the configured default.
fn resolve_kinds(kind: Option<KindArg>, settings: &Settings) -> Vec<ListKind> {
    kind.map(KindArg::kinds)
        .unwrap_or_else(|| vec![settings.default_kind])
}

#[instrument(skip(settings))]
fn _conform(kind: Option<KindArg>, settings: &Settings) -> CliResult<()> {
    let kinds = resolve_kinds(kind, settings);
    let mut first_failure: Option<ApplicationError> = None;

    for outcome in check_kinds(&kinds) {
        match &outcome.result {
            Ok(report) => output::success(&format!(
                "{}: {} steps, final {:?}",
                outcome.kind, report.steps, report.contents
            )),
            Err(e) => output::failure(&format!("{}: {}", outcome.kind, e)),
        }
        if let Err(e) = outcome.into_result() {
            first_failure.get_or_insert(e);
        }
    }

    match first_failure {
        Some(e) => Err(CliError::Application(e)),
        None => Ok(()),
    }
}

#[instrument(skip(candidates, settings))]
fn _show(name: &str, candidates: &[Fixture], settings: &Settings) -> CliResult<()> {
    let fixture = Fixture::lookup(name, candidates).map_err(|e| {
        CliError::Usage(format!(
            "{} (expected one of: {})",
            e,
            candidates.iter().join(", ")
        ))
    })?;
    output::info(&fixture.render(&settings.fixtures));
    Ok(())
}

fn _fixtures() -> CliResult<()> {
    output::header("graphs");
    for f in GRAPH_FIXTURES {
        output::detail(&f);
    }
    output::header("trees");
    for f in TREE_FIXTURES {
        output::detail(&f);
    }
    Ok(())
}

fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::detail(&path.display()),
            None => return Err(CliError::Usage("no home directory for global config".into())),
        },
    }
    Ok(())
}
