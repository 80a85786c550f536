//! Running the subcommands.

use crate::args::{Action, Args, Format};
use anyhow::{Context, Result};
use lifegame_lib::{rules::Life, Board, Settings, Simulation, SimulationSer, Status};
use log::{info, warn};
use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

/// Exit code when no final state is found within the maximal number of attempts.
const EXHAUSTED: u8 = 2;

/// Loads the settings, or the default settings if no file is given.
fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
    info!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Whether a board file is in Plaintext format, judging from its extension.
fn is_plaintext(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("cells" | "txt")
    )
}

/// Parses a board, either a JSON array of rows or Plaintext.
fn parse_board(content: &str, plaintext: bool, settings: &Settings) -> Result<Board> {
    if plaintext {
        settings
            .read_plaintext(content)
            .context("Failed to parse Plaintext board")
    } else {
        serde_json::from_str(content).context("Failed to parse JSON board")
    }
}

fn read_board(path: &Path, settings: &Settings) -> Result<Board> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read board file {}", path.display()))?;
    parse_board(&content, is_plaintext(path), settings)
}

fn load(path: &Path) -> Result<Simulation> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read save file {}", path.display()))?;
    let save: SimulationSer = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse save file {}", path.display()))?;
    let simulation = save
        .simulation()
        .with_context(|| format!("Invalid save file {}", path.display()))?;
    info!(
        "Loaded simulation {} at generation {} from {}",
        simulation.id(),
        simulation.generation(),
        path.display()
    );
    Ok(simulation)
}

fn store(simulation: &Simulation, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&simulation.ser())
        .context("Failed to serialize simulation")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write save file {}", path.display()))?;
    info!(
        "Saved simulation {} at generation {} to {}",
        simulation.id(),
        simulation.generation(),
        path.display()
    );
    Ok(())
}

/// Displays the current board of the simulation.
fn display(simulation: &Simulation, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            serde_json::to_string(simulation.current_state()).context("Failed to serialize board")
        }
        Format::Plaintext => Ok(simulation.grid().to_string().trim_end().to_owned()),
    }
}

fn start(
    settings: &Settings,
    board: &Path,
    output: Option<PathBuf>,
    owner: Option<i32>,
    rule: Life,
) -> Result<ExitCode> {
    if rule.has_b0() {
        warn!(
            "Rule {} contains B0, but cells outside the board stay dead",
            rule
        );
    }
    let board = read_board(board, settings)?;
    let simulation = settings
        .start(board, owner)
        .context("Invalid board")?
        .set_rule(rule);
    let output = output.unwrap_or_else(|| PathBuf::from(format!("{}.json", simulation.id())));
    store(&simulation, &output)?;
    println!("{}", simulation.id());
    Ok(ExitCode::SUCCESS)
}

/// Runs the subcommand.
pub(crate) fn run(args: Args) -> Result<ExitCode> {
    let settings = load_settings(args.config.as_deref())?;
    match args.action {
        Action::Start {
            board,
            output,
            owner,
            rule,
        } => start(&settings, &board, output, owner, rule),
        Action::Next { save, generations } => {
            let mut simulation = load(&save)?;
            simulation.advance_by(generations);
            store(&simulation, &save)?;
            println!("{}", display(&simulation, args.format)?);
            Ok(ExitCode::SUCCESS)
        }
        Action::Final { save } => {
            let mut simulation = load(&save)?;
            match settings.find_final(&mut simulation) {
                Status::Final => {
                    store(&simulation, &save)?;
                    println!("{}", display(&simulation, args.format)?);
                    Ok(ExitCode::SUCCESS)
                }
                Status::Exhausted => {
                    eprintln!(
                        "The maximum number of attempts ({}) was reached without reaching a final state.",
                        settings.max_attempts
                    );
                    Ok(ExitCode::from(EXHAUSTED))
                }
            }
        }
        Action::Show { save } => {
            let simulation = load(&save)?;
            println!("id = {}", simulation.id());
            if let Some(owner) = simulation.owner() {
                println!("owner = {}", owner);
            }
            println!("generation = {}", simulation.generation());
            println!("rule = {}", simulation.rule());
            println!("{}", display(&simulation, args.format)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
