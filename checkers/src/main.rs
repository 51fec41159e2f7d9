use std::{fs, io, path::Path};

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches};
use tracing::{info, Level};

use checkers_replay::{movelist, Move, Outcome, Replay, Scenario};

fn main() -> Result<()> {
    let matches = App::new("Checkers")
        .version("0.1")
        .about("Replays a checkers move list and reports how the game ended.")
        .arg(
            Arg::with_name("scenario")
                .value_name("SCENARIO")
                .help(
                    "scenario to replay: \"first-side-demo\", \"second-side-demo\", \
                     \"illegal-move-demo\", or \"incomplete-game-demo\"",
                )
                .required(true),
        )
        .arg(
            Arg::with_name("moves_dir")
                .short("d")
                .long("moves-dir")
                .value_name("DIR")
                .help("read the scenario's move file from DIR instead of the bundled copy")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("show_board")
                .short("b")
                .long("show-board")
                .help("print the final board after the result"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log more detail to stderr, may be repeated"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let scenario: Scenario = matches.value_of("scenario").unwrap_or_default().parse()?;
    let moves = load_moves(scenario, &matches)?;
    let mut replay = Replay::new(moves);
    let outcome = replay
        .run()
        .with_context(|| format!("could not replay {}", scenario.file_name()))?;

    match outcome {
        Outcome::Finished(_) => println!("{}", outcome),
        Outcome::Illegal { .. } | Outcome::Incomplete => {
            println!("{} - {}", scenario.file_name(), outcome)
        }
    }
    if matches.is_present("show_board") {
        println!();
        println!("{}", replay.board());
    }
    Ok(())
}

/// Send logs to stderr so stdout only carries the report. Verbosity 0 logs warnings,
/// each extra level adds info, debug, then trace.
fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Load the move list for `scenario`, either from the directory given on the command
/// line or from the copy bundled with the library.
fn load_moves(scenario: Scenario, matches: &ArgMatches) -> Result<Vec<Move>> {
    match matches.value_of("moves_dir").map(Path::new) {
        Some(dir) => {
            let path = dir.join(scenario.file_name());
            info!("reading {} from {}", scenario, path.display());
            let text = fs::read_to_string(&path)
                .with_context(|| format!("could not read {}", path.display()))?;
            movelist::parse(&text).with_context(|| format!("malformed {}", path.display()))
        }
        None => {
            info!("using bundled {} for {}", scenario.file_name(), scenario);
            scenario
                .load_bundled()
                .with_context(|| format!("malformed bundled {}", scenario.file_name()))
        }
    }
}
