use std::path::PathBuf;
use thiserror::Error;

/// Fatal enumeration failures. Aborts the run before any file is visited.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Per-file failures. Recovered locally: logged, the file is skipped, and
/// processing continues with the next path.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to initialize zstd decoder for '{}': {source}", .path.display())]
    Decoder {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Collects per-game parse diagnostics without aborting the file.
/// Messages are joined with `"; "` and attached to the game record.
#[derive(Debug, Clone, Default)]
pub struct ErrorAccumulator(Option<String>);

impl ErrorAccumulator {
    pub fn push(&mut self, msg: &str) {
        match &mut self.0 {
            Some(existing) => {
                existing.push_str("; ");
                existing.push_str(msg);
            }
            None => {
                self.0 = Some(msg.to_string());
            }
        }
    }

    pub fn take(&mut self) -> Option<String> {
        self.0.take()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}
