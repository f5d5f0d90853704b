//! Game record with variations and a navigable cursor.
//!
//! A [`Game`] owns two boards. The main-line board is the game of record; the
//! observer board materializes whatever [`Node`] the cursor points at, so
//! browsing never disturbs the record. Alternative lines live in an arena of
//! [`Variation`]s addressed by [`VariationId`].
//!
//! # Example
//! ```
//! use chess_rules::{Game, Move, MoveOutcome, Node};
//!
//! let mut game = Game::new();
//! for text in ["e2e4", "e7e5", "g1f3"] {
//!     game.play(text.parse::<Move>().unwrap()).unwrap();
//! }
//! game.go_to(Node::MainLine(0)).unwrap();
//! // Black deviates: a variation is created, the main line is untouched.
//! assert_eq!(game.play("c7c5".parse().unwrap()).unwrap(), MoveOutcome::Ok);
//! assert_eq!(game.board().moves().len(), 3);
//! assert!(matches!(game.cursor(), Node::Variation(_, 0)));
//! ```

mod tree;

pub use tree::{Node, Variation, VariationId};

use tree::VariationArena;

use crate::board::{Board, ChessError, FenFields, Move, MoveOutcome, PlayedMove};

#[derive(Clone, Debug)]
pub struct Game {
    start: Board,
    board: Board,
    observer: Board,
    cursor: Node,
    variations: VariationArena,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new())
    }

    /// A game from already-parsed FEN fields.
    pub fn from_fields(fields: FenFields) -> Result<Self, ChessError> {
        Ok(Game::from_board(Board::from_fields(fields)?))
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        Ok(Game::from_board(Board::from_fen(fen)?))
    }

    fn from_board(start: Board) -> Self {
        Game {
            board: start.clone(),
            observer: start.clone(),
            start,
            cursor: Node::Start,
            variations: VariationArena::default(),
        }
    }

    /// The main-line board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board at the cursor.
    #[must_use]
    pub fn observer(&self) -> &Board {
        &self.observer
    }

    #[must_use]
    pub fn cursor(&self) -> Node {
        self.cursor
    }

    #[must_use]
    pub fn start_fields(&self) -> FenFields {
        self.start.to_fields()
    }

    pub fn main_line(&self) -> impl Iterator<Item = Move> + '_ {
        self.board.moves().iter().map(|played| played.mv)
    }

    #[must_use]
    pub fn variation(&self, id: VariationId) -> Option<&Variation> {
        self.variations.get(id)
    }

    pub fn variations(&self) -> impl Iterator<Item = (VariationId, &Variation)> + '_ {
        self.variations.iter()
    }

    /// Variations offering an alternative to the move recorded after `node`.
    #[must_use]
    pub fn variations_at(&self, node: Node) -> Vec<VariationId> {
        self.variations.branching_at(node).collect()
    }

    /// Whether `node` exists in this game.
    #[must_use]
    pub fn contains(&self, node: Node) -> bool {
        match node {
            Node::Start => true,
            Node::MainLine(ply) => ply < self.board.moves().len(),
            Node::Variation(id, idx) => self
                .variations
                .get(id)
                .is_some_and(|var| idx < var.moves.len()),
        }
    }

    fn main_tip(&self) -> Node {
        match self.board.moves().len() {
            0 => Node::Start,
            len => Node::MainLine(len - 1),
        }
    }

    /// The move recorded after `node` on the same line, with the node it
    /// leads to.
    fn next_recorded(&self, node: Node) -> Option<(Node, Move)> {
        match node {
            Node::Start => self.main_line().next().map(|mv| (Node::MainLine(0), mv)),
            Node::MainLine(ply) => self
                .board
                .moves()
                .get(ply + 1)
                .map(|played| (Node::MainLine(ply + 1), played.mv)),
            Node::Variation(id, idx) => self
                .variations
                .get(id)
                .and_then(|var| var.moves.get(idx + 1))
                .map(|mv| (Node::Variation(id, idx + 1), *mv)),
        }
    }

    fn previous_node(&self, node: Node) -> Option<Node> {
        match node {
            Node::Start => None,
            Node::MainLine(0) => Some(Node::Start),
            Node::MainLine(ply) => Some(Node::MainLine(ply - 1)),
            Node::Variation(id, 0) => self.variations.entry_node(id),
            Node::Variation(id, idx) => Some(Node::Variation(id, idx - 1)),
        }
    }

    fn advance(&mut self, mv: Move, next: Node) -> Result<MoveOutcome, ChessError> {
        let outcome = self.observer.apply(mv)?;
        if outcome.is_ok() {
            self.cursor = next;
        }
        Ok(outcome)
    }

    /// Play `mv` at the cursor.
    ///
    /// At the main-line tip the main line grows. Replaying the recorded next
    /// move, or the first move of a variation branching here, only moves the
    /// cursor. At the end of a variation the variation grows. Anywhere else a
    /// new variation is created. Rejected moves change nothing.
    pub fn play(&mut self, mv: Move) -> Result<MoveOutcome, ChessError> {
        let here = self.cursor;

        if let Some((next, recorded)) = self.next_recorded(here) {
            if recorded == mv {
                return self.advance(mv, next);
            }
        }
        let existing = self
            .variations
            .branching_at(here)
            .find(|id| {
                self.variations
                    .get(*id)
                    .and_then(|var| var.moves.first())
                    == Some(&mv)
            });
        if let Some(id) = existing {
            return self.advance(mv, Node::Variation(id, 0));
        }

        let outcome = self.observer.apply(mv)?;
        if !outcome.is_ok() {
            return Ok(outcome);
        }

        if here == self.main_tip() {
            let main = self.board.apply(mv)?;
            debug_assert!(main.is_ok(), "observer and main line diverged at the tip");
            self.cursor = self.main_tip();
            return Ok(outcome);
        }

        if let Node::Variation(id, idx) = here {
            if let Some(var) = self.variations.get_mut(id) {
                if idx + 1 == var.moves.len() {
                    var.moves.push(mv);
                    self.cursor = Node::Variation(id, idx + 1);
                    return Ok(outcome);
                }
            }
        }

        let (start_ply, parent) = match here {
            Node::Start => (0, None),
            Node::MainLine(ply) => (ply + 1, None),
            Node::Variation(id, idx) => {
                let start_ply = self.variations.get(id).map_or(0, Variation::start_ply);
                (start_ply, Some((id, idx + 1)))
            }
        };
        let id = self.variations.insert(Variation {
            start_ply,
            parent,
            moves: vec![mv],
        });
        rules_debug!("variation {} created at ply {} from {}", id, start_ply, here);
        self.cursor = Node::Variation(id, 0);
        Ok(outcome)
    }

    /// Append `mv` to the main line wherever the cursor is. The cursor follows
    /// only if it sat at the old tip.
    pub fn push_main(&mut self, mv: Move) -> Result<MoveOutcome, ChessError> {
        let was_at_tip = self.cursor == self.main_tip();
        let outcome = self.board.apply(mv)?;
        if outcome.is_ok() && was_at_tip {
            let mirrored = self.observer.apply(mv)?;
            debug_assert!(mirrored.is_ok(), "observer and main line diverged at the tip");
            self.cursor = self.main_tip();
        }
        Ok(outcome)
    }

    /// Take back the last main-line move.
    ///
    /// Variations branching at or after the removed ply go with it. If the
    /// cursor pointed into what was removed it moves to the new tip.
    pub fn undo_main(&mut self) -> Option<PlayedMove> {
        let played = self.board.undo()?;
        let len = self.board.moves().len();
        let pruned = self.variations.prune_from(len);
        if !self.contains(self.cursor) {
            self.observer = self.board.clone();
            self.cursor = self.main_tip();
        }
        rules_debug!("main line undo {}, {} variations pruned", played.mv, pruned);
        Some(played)
    }

    /// Step the cursor to the next move on its line. Returns `false` at the
    /// end of the line.
    pub fn forward(&mut self) -> Result<bool, ChessError> {
        match self.next_recorded(self.cursor) {
            Some((next, mv)) => Ok(self.advance(mv, next)?.is_ok()),
            None => Ok(false),
        }
    }

    /// Step the cursor back one move. Leaving a variation's first move lands
    /// on the node it branched from. Returns `false` at the start.
    pub fn backward(&mut self) -> bool {
        match self.previous_node(self.cursor) {
            Some(previous) => {
                self.observer.undo();
                self.cursor = previous;
                true
            }
            None => false,
        }
    }

    /// Jump the cursor to `node`, rebuilding the observer by replay.
    pub fn go_to(&mut self, node: Node) -> Result<(), ChessError> {
        if !self.contains(node) {
            return Err(ChessError::UnknownNode {
                node: node.to_string(),
            });
        }
        self.observer = self.replay(node)?;
        self.cursor = node;
        rules_debug!("cursor moved to {}", node);
        Ok(())
    }

    pub fn go_to_start(&mut self) {
        self.observer = self.start.clone();
        self.cursor = Node::Start;
    }

    /// Place the cursor before main-line ply `start_ply` and play `moves`,
    /// stopping at the first one that is rejected. Returns the last outcome.
    pub fn create_variation(
        &mut self,
        start_ply: usize,
        moves: &[Move],
    ) -> Result<MoveOutcome, ChessError> {
        let entry = match start_ply {
            0 => Node::Start,
            ply => Node::MainLine(ply - 1),
        };
        self.go_to(entry)?;

        let mut outcome = MoveOutcome::Ok;
        for &mv in moves {
            outcome = self.play(mv)?;
            if !outcome.is_ok() {
                break;
            }
        }
        Ok(outcome)
    }

    /// Moves leading from the start position to `node`: the main-line prefix,
    /// each ancestor variation's prefix (outermost first), then the target
    /// line up to and including the node.
    fn path_to(&self, node: Node) -> Option<Vec<Move>> {
        let main: Vec<Move> = self.main_line().collect();
        match node {
            Node::Start => Some(Vec::new()),
            Node::MainLine(ply) => main.get(..=ply).map(<[Move]>::to_vec),
            Node::Variation(id, idx) => {
                let start_ply = self.variations.get(id)?.start_ply;
                let mut path = main.get(..start_ply)?.to_vec();
                for (vid, count) in self.variations.chain(id, idx + 1)? {
                    path.extend_from_slice(self.variations.get(vid)?.moves.get(..count)?);
                }
                Some(path)
            }
        }
    }

    fn replay(&self, node: Node) -> Result<Board, ChessError> {
        let unknown = || ChessError::UnknownNode {
            node: node.to_string(),
        };
        let path = self.path_to(node).ok_or_else(unknown)?;
        let mut board = self.start.clone();
        for mv in path {
            if !board.apply(mv)?.is_ok() {
                return Err(unknown());
            }
        }
        Ok(board)
    }
}
