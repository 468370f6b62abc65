use crate::types::GameRecord;
use serde_json::json;
use std::fmt::Write;
use std::path::Path;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<path>: <numbered movetext>`, one line per game.
    Plain,
    /// One JSON object per line with source, game index and SAN move array.
    Json,
}

/// Renders a move list as numbered movetext: `1. e4 e5 2. Nf3 ...`.
pub fn format_movetext(moves: &[String]) -> String {
    let mut out = String::new();
    for (ply, san) in moves.iter().enumerate() {
        if !out.is_empty() {
            out.push(' ');
        }
        if ply.is_multiple_of(2) {
            let _ = write!(out, "{}. ", ply / 2 + 1);
        }
        let _ = write!(out, "{}", san);
    }
    out
}

/// Renders one output line for a game. `game_index` is 1-based within the
/// source file; plain output repeats the path for every game in the file.
pub fn render_game(
    path: &Path,
    game_index: usize,
    game: &GameRecord,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Plain => {
            let mut line = format!("{}:", path.display());
            let movetext = format_movetext(&game.moves);
            if !movetext.is_empty() {
                line.push(' ');
                line.push_str(&movetext);
            }
            if let Some(outcome) = &game.outcome {
                line.push(' ');
                line.push_str(outcome);
            }
            line
        }
        OutputFormat::Json => {
            let moves: Vec<&str> = game.moves.iter().map(String::as_str).collect();
            let mut obj = json!({
                "source": path.display().to_string(),
                "game": game_index,
                "moves": moves,
            });
            if let Some(outcome) = &game.outcome {
                obj["outcome"] = json!(outcome);
            }
            if let Some(parse_error) = &game.parse_error {
                obj["parse_error"] = json!(parse_error);
            }
            obj.to_string()
        }
    }
}
