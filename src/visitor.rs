use crate::error::ErrorAccumulator;
use crate::types::GameRecord;
use pgn_reader::{Outcome, SanPlus, Skip, Visitor};
use shakmaty::{Chess, Position};
use smallvec::SmallVec;
use std::ops::ControlFlow;

pub type MoveList = SmallVec<[String; 128]>;

/// Streaming PGN visitor (pgn-reader).
///
/// Accumulates mainline SAN moves, validating each one against a running
/// position so that an illegal or ambiguous SAN truncates the list at the
/// last legal move instead of producing a nonsense sequence. Variations are
/// skipped; comments and NAGs are ignored. The outcome marker is captured
/// separately.
pub struct MovesVisitor {
    position: Chess,
    ply: u32,
    halted: bool,
    outcome_marker: Option<String>,
    parse_error: ErrorAccumulator,
    pub current_game: Option<GameRecord>,
}

impl MovesVisitor {
    pub fn new() -> Self {
        Self {
            position: Chess::default(),
            ply: 0,
            halted: false,
            outcome_marker: None,
            parse_error: ErrorAccumulator::default(),
            current_game: None,
        }
    }

    fn build_game_record(&mut self, moves: MoveList) {
        self.current_game = Some(GameRecord {
            moves,
            outcome: self.outcome_marker.take(),
            parse_error: self.parse_error.take(),
        });
    }

    /// Finalizes the in-progress game with an error attached. Used when the
    /// reader hits an I/O error mid-game and `end_game` will never run; the
    /// moves buffered inside the reader callback are lost at that point.
    pub fn fail_game(&mut self, error_msg: String) {
        self.parse_error.push(&error_msg);
        self.build_game_record(MoveList::new());
    }
}

impl Visitor for MovesVisitor {
    type Tags = ();
    type Movetext = MoveList;
    type Output = ();

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        self.position = Chess::default();
        self.ply = 0;
        self.halted = false;
        self.outcome_marker = None;
        self.parse_error = ErrorAccumulator::default();
        self.current_game = None;
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, _: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(MoveList::new())
    }

    fn begin_variation(&mut self, _: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn san(&mut self, movetext: &mut Self::Movetext, san: SanPlus) -> ControlFlow<Self::Output> {
        if self.halted {
            return ControlFlow::Continue(());
        }

        match san.san.to_move(&self.position) {
            Ok(m) => {
                self.position.play_unchecked(m);
                self.ply += 1;
                movetext.push(san.to_string());
            }
            Err(error) => {
                self.parse_error.push(&format!(
                    "Illegal SAN '{}' at ply {}: {}",
                    san,
                    self.ply + 1,
                    error
                ));
                self.halted = true;
            }
        }

        ControlFlow::Continue(())
    }

    fn outcome(&mut self, _: &mut Self::Movetext, outcome: Outcome) -> ControlFlow<Self::Output> {
        self.outcome_marker = Some(outcome.to_string());
        ControlFlow::Continue(())
    }

    fn end_game(&mut self, movetext: Self::Movetext) -> Self::Output {
        self.build_game_record(movetext);
    }
}
