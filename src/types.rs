use crate::visitor::MoveList;

/// One parsed game: the mainline move list plus parse diagnostics.
#[derive(Debug, Clone, Default)]
pub struct GameRecord {
    /// Mainline SAN moves, truncated at the first illegal move if any.
    pub moves: MoveList,

    /// Game termination marker (`1-0`, `0-1`, `1/2-1/2`, `*`) when present.
    pub outcome: Option<String>,

    /// Contains None for cleanly parsed games or the joined error messages
    /// for games that parsed with problems.
    pub parse_error: Option<String>,
}
