//! Parsing command-line arguments.

use clap::{
    crate_description, crate_name, crate_version,
    error::{ErrorKind, Result as ClapResult},
    value_parser, Arg, ArgMatches, Command,
};
use lifegame_lib::rules::Life;
use std::{ffi::OsString, path::PathBuf};

/// How to print a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    /// A JSON array of rows.
    Json,
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext).
    Plaintext,
}

/// What to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    /// Starts a new simulation from a board file.
    Start {
        board: PathBuf,
        output: Option<PathBuf>,
        owner: Option<i32>,
        rule: Life,
    },
    /// Advances a saved simulation.
    Next { save: PathBuf, generations: u64 },
    /// Looks for the final state of a saved simulation.
    Final { save: PathBuf },
    /// Shows a saved simulation.
    Show { save: PathBuf },
}

/// A struct to store the parse results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Args {
    pub(crate) config: Option<PathBuf>,
    pub(crate) format: Format,
    pub(crate) action: Action,
}

fn save_arg() -> Arg {
    Arg::new("SAVE")
        .help("Save file of the simulation")
        .required(true)
        .value_parser(value_parser!(PathBuf))
}

fn command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .long_about(
            "Conway's Game of Life simulations from the command line\n\
             \n\
             A board is a JSON array of rows, each row an array of booleans, e.g. \n\
             [[false,true,false],[false,true,false],[false,true,false]]\n\
             Files ending with `.cells` or `.txt` are read as Plaintext instead:\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `O` or `*`;\n\
             * Lines starting with `!` are comments.\n\
             \n\
             Cells outside the board are always dead.\n",
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("CONFIG")
                .help("TOML file with the settings")
                .long_help(
                    "TOML file with the settings\n\
                     Recognized keys are `max_board_size` (default 100) and \
                     `max_attempts` (default 1000).\n",
                )
                .short('c')
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("FORMAT")
                .help("How to print boards")
                .short('f')
                .long("format")
                .global(true)
                .value_parser(["json", "plaintext", "j", "p"])
                .default_value("json"),
        )
        .subcommand(
            Command::new("start")
                .about("Starts a new simulation and prints its identifier")
                .arg(
                    Arg::new("BOARD")
                        .help("File of the initial board")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("OUTPUT")
                        .help("Where to save the simulation")
                        .long_help(
                            "Where to save the simulation\n\
                             Defaults to `<id>.json` in the current directory.\n",
                        )
                        .short('o')
                        .long("output")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("OWNER")
                        .help("Identifier of the owner")
                        .long("owner")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("RULE")
                        .help("Rule of the cellular automaton")
                        .long_help(
                            "Rule of the cellular automaton\n\
                             Supports totalistic Life-like rules.\n",
                        )
                        .short('r')
                        .long("rule")
                        .default_value("B3/S23")
                        .value_parser(|s: &str| s.parse::<Life>().map_err(|e| e.to_string())),
                ),
        )
        .subcommand(
            Command::new("next")
                .about("Advances a simulation and prints the new board")
                .arg(save_arg())
                .arg(
                    Arg::new("GENERATIONS")
                        .help("Number of generations to advance")
                        .default_value("1")
                        .value_parser(value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("final")
                .about("Advances a simulation until it stops changing, and prints the board")
                .long_about(
                    "Advances a simulation until it stops changing, and prints the board\n\
                     Gives up after `max_attempts` generations. In that case the save \
                     file is left untouched and the exit code is 2.\n\
                     Oscillators and spaceships never stop changing.\n",
                )
                .arg(save_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Prints a saved simulation")
                .arg(save_arg()),
        )
}

fn action(name: &str, matches: &ArgMatches) -> Action {
    let path = |id: &str| {
        matches
            .get_one::<PathBuf>(id)
            .cloned()
            .unwrap_or_default()
    };
    match name {
        "start" => Action::Start {
            board: path("BOARD"),
            output: matches.get_one::<PathBuf>("OUTPUT").cloned(),
            owner: matches.get_one::<i32>("OWNER").copied(),
            rule: matches
                .get_one::<Life>("RULE")
                .copied()
                .unwrap_or_default(),
        },
        "next" => Action::Next {
            save: path("SAVE"),
            generations: matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(1),
        },
        "final" => Action::Final { save: path("SAVE") },
        _ => Action::Show { save: path("SAVE") },
    }
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> ClapResult<Self> {
        Self::parse_from(std::env::args_os())
    }

    /// Parses the given arguments.
    pub(crate) fn parse_from<I, T>(args: I) -> ClapResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;

        let Some((name, matches)) = matches.subcommand() else {
            return Err(command().error(ErrorKind::MissingSubcommand, "a subcommand is required"));
        };
        let action = action(name, matches);

        // Global arguments are propagated to the subcommand.
        let config = matches.get_one::<PathBuf>("CONFIG").cloned();
        let format = match matches.get_one::<String>("FORMAT").map(String::as_str) {
            Some("plaintext" | "p") => Format::Plaintext,
            _ => Format::Json,
        };

        Ok(Args {
            config,
            format,
            action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start() -> ClapResult<()> {
        let args = Args::parse_from([
            "lifegame", "start", "board.json", "-o", "game.json", "--owner", "-1", "-r", "B36/S23",
        ])?;
        assert_eq!(args.format, Format::Json);
        assert_eq!(args.config, None);
        assert_eq!(
            args.action,
            Action::Start {
                board: PathBuf::from("board.json"),
                output: Some(PathBuf::from("game.json")),
                owner: Some(-1),
                rule: "B36/S23".parse().unwrap(),
            }
        );
        Ok(())
    }

    #[test]
    fn next() -> ClapResult<()> {
        let args = Args::parse_from(["lifegame", "next", "game.json"])?;
        assert_eq!(
            args.action,
            Action::Next {
                save: PathBuf::from("game.json"),
                generations: 1,
            }
        );

        let args = Args::parse_from([
            "lifegame", "next", "game.json", "5", "--format", "p", "-c", "settings.toml",
        ])?;
        assert_eq!(args.format, Format::Plaintext);
        assert_eq!(args.config, Some(PathBuf::from("settings.toml")));
        assert_eq!(
            args.action,
            Action::Next {
                save: PathBuf::from("game.json"),
                generations: 5,
            }
        );
        Ok(())
    }

    #[test]
    fn invalid() {
        assert!(Args::parse_from(["lifegame"]).is_err());
        assert!(Args::parse_from(["lifegame", "next", "game.json", "-3"]).is_err());
        assert!(Args::parse_from(["lifegame", "start", "b.json", "--rule", "Conway"]).is_err());
        assert!(Args::parse_from(["lifegame", "final"]).is_err());
    }
}
