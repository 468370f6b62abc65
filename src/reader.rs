use crate::error::FileError;
use crate::types::GameRecord;
use crate::visitor::MovesVisitor;
use pgn_reader::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zstd::stream::read::Decoder as ZstdDecoder;

pub type PgnInput = Box<dyn Read + Send>;

/// Opens `path` for reading. Paths ending in `.zst` are wrapped in a zstd
/// streaming decoder. The handle is owned by the returned stream and dropped
/// with it, on success and error paths alike.
fn open_input_stream(path: &Path) -> Result<PgnInput, FileError> {
    let file = File::open(path).map_err(|source| FileError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zst"))
    {
        ZstdDecoder::new(file)
            .map(|decoder| Box::new(decoder) as PgnInput)
            .map_err(|source| FileError::Decoder {
                path: path.to_path_buf(),
                source,
            })
    } else {
        Ok(Box::new(file))
    }
}

/// Reads every game in the file at `path`.
///
/// Individual games that parse with problems are still returned, with
/// `parse_error` set. An I/O error mid-stream finalizes the current game
/// with the error attached and stops reading the file.
pub fn read_games(path: &Path) -> Result<Vec<GameRecord>, FileError> {
    let input = open_input_stream(path)?;

    // pgn-reader buffers the underlying reader with its own strategy, so no
    // extra BufReader layer here.
    let mut reader = Reader::new(input);
    let mut visitor = MovesVisitor::new();
    let mut games = Vec::new();
    let mut game_index = 1usize;

    loop {
        match reader.read_game(&mut visitor) {
            Ok(Some(())) => {
                if let Some(game) = visitor.current_game.take() {
                    games.push(game);
                }
                game_index += 1;
            }
            Ok(None) => break,
            Err(error) => {
                visitor.fail_game(format!(
                    "read error in '{}' at game {}: {}",
                    path.display(),
                    game_index,
                    error
                ));
                if let Some(game) = visitor.current_game.take() {
                    games.push(game);
                }
                break;
            }
        }
    }

    Ok(games)
}
