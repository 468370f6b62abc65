use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod error;
mod logging;
mod output;
mod reader;
mod scan;
mod types;
mod visitor;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "pgn-scan",
    about = "List the move sequences of chess game files in a directory"
)]
struct Config {
    /// Directory to scan for game files
    dir: PathBuf,

    /// File extension to match (use "pgn.zst" for zstd-compressed files)
    #[arg(long, default_value = "pgn")]
    ext: String,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    format: OutputFormat,
}

fn main() -> ExitCode {
    logging::setup_logging();
    let config = Config::parse();

    // Only the initial scan is fatal; everything after is per-file.
    let paths = match scan::scan_directory(&config.dir, &config.ext) {
        Ok(paths) => paths,
        Err(error) => {
            log::error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    for path in &paths {
        let games = match reader::read_games(path) {
            Ok(games) => games,
            Err(error) => {
                log::warn!("{error}");
                continue;
            }
        };

        if games.is_empty() {
            log::warn!("no games found in '{}'", path.display());
            continue;
        }

        for (idx, game) in games.iter().enumerate() {
            if let Some(parse_error) = &game.parse_error {
                log::warn!("{}: game {}: {}", path.display(), idx + 1, parse_error);
            }
            println!("{}", output::render_game(path, idx + 1, game, config.format));
        }
    }

    ExitCode::SUCCESS
}
