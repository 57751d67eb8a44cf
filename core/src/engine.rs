use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Score awarded for every cleared round.
pub const ROUND_SCORE: i32 = 10;

/// Valid transitions:
/// - AwaitingReveal -> Active (reveal countdown ends)
/// - Active -> LevelComplete (last clearable round won)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    /// Values are visible, the countdown is running, input is ignored.
    AwaitingReveal,
    /// Values are hidden and picks are accepted.
    Active,
    /// Terminal for the level; a new game means a new session.
    LevelComplete,
}

impl SessionState {
    pub const fn accepts_input(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_complete(self) -> bool {
        matches!(self, Self::LevelComplete)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::AwaitingReveal
    }
}

/// Outcome of picking a tile.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PickOutcome {
    NoChange,
    Picked,
    Undone,
    ChainBroken,
    Overshoot,
    RoundWon,
    LevelCleared,
}

impl PickOutcome {
    /// Whether this outcome could have caused an update to the session.
    pub const fn has_update(self) -> bool {
        use PickOutcome::*;
        match self {
            NoChange => false,
            Picked => true,
            Undone => true,
            ChainBroken => true,
            Overshoot => true,
            RoundWon => true,
            LevelCleared => true,
        }
    }
}

/// Outcome of a timer-driven signal (reveal end, peek start/stop).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SignalOutcome {
    NoChange,
    Changed,
}

impl SignalOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// One level of play from reveal to completion. The session owns every piece
/// of per-level state; starting a new game means constructing a replacement
/// session, which atomically discards the previous selection, target, and
/// peek state along with the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    preset: Preset,
    board: Board,
    target: TileValue,
    selection: SmallVec<[TileId; 8]>,
    score: i32,
    state: SessionState,
    peeking: bool,
    seed: u64,
    rounds: u32,
}

impl GameSession {
    pub fn new(preset: Preset, seed: u64) -> Result<Self> {
        let board = RandomBoardGenerator::new(seed).generate(&preset)?;
        Self::with_board(preset, board, seed)
    }

    /// Builds a session around an existing board, which must match the
    /// preset's layout.
    pub fn with_board(preset: Preset, board: Board, seed: u64) -> Result<Self> {
        preset.validate()?;
        if board.len() != usize::from(preset.total_tiles()) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut session = Self {
            preset,
            board,
            target: 0,
            selection: SmallVec::new(),
            score: 0,
            state: SessionState::AwaitingReveal,
            peeking: false,
            seed,
            rounds: 0,
        };
        session.draw_target();
        if session.target == 0 {
            session.state = SessionState::LevelComplete;
        }
        Ok(session)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn target(&self) -> TileValue {
        self.target
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Number of target draws so far, including the initial one.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn selection(&self) -> &[TileId] {
        &self.selection
    }

    pub fn selection_sum(&self) -> TileValue {
        self.selection.iter().map(|&id| self.board[id].value).sum()
    }

    pub fn uncleared_count(&self) -> usize {
        self.board.uncleared_count()
    }

    pub fn is_peeking(&self) -> bool {
        self.peeking
    }

    /// Whether the view should currently show tile values instead of labels.
    pub fn numbers_visible(&self) -> bool {
        matches!(self.state, SessionState::AwaitingReveal) || self.peeking
    }

    /// Signal that the reveal countdown has run out and input opens up.
    pub fn end_reveal(&mut self) -> SignalOutcome {
        if matches!(self.state, SessionState::AwaitingReveal) {
            self.state = SessionState::Active;
            SignalOutcome::Changed
        } else {
            SignalOutcome::NoChange
        }
    }

    /// Temporarily re-reveal the values. Repeated triggers while a peek is
    /// already running are ignored, so peek windows never stack.
    pub fn start_peek(&mut self) -> SignalOutcome {
        if self.peeking || !self.state.accepts_input() {
            return SignalOutcome::NoChange;
        }
        self.peeking = true;
        SignalOutcome::Changed
    }

    pub fn end_peek(&mut self) -> SignalOutcome {
        if self.peeking {
            self.peeking = false;
            SignalOutcome::Changed
        } else {
            SignalOutcome::NoChange
        }
    }

    /// Handle a click on tile `tile_id`. The only state-mutating entry point
    /// for gameplay; score, target, cleared flags, and the selection change
    /// only through here.
    pub fn pick(&mut self, tile_id: TileId) -> Result<PickOutcome> {
        use PickOutcome::*;

        let cleared = self.board.tile(tile_id)?.cleared;
        if !self.state.accepts_input() || cleared {
            return Ok(NoChange);
        }

        if self.selection.last() == Some(&tile_id) {
            self.selection.pop();
            return Ok(Undone);
        }
        if self.selection.contains(&tile_id) {
            // re-picking an earlier tile breaks the chain and forfeits it
            self.selection.clear();
            return Ok(ChainBroken);
        }

        self.selection.push(tile_id);
        let sum = self.selection_sum();
        if sum < self.target {
            return Ok(Picked);
        }
        if sum > self.target {
            self.selection.clear();
            return Ok(Overshoot);
        }
        Ok(self.settle_round())
    }

    fn settle_round(&mut self) -> PickOutcome {
        for &id in &self.selection {
            self.board.clear(id);
        }
        self.selection.clear();
        self.score += ROUND_SCORE;

        self.draw_target();
        if self.target == 0 {
            self.state = SessionState::LevelComplete;
            log::debug!("level complete with score {}", self.score);
            PickOutcome::LevelCleared
        } else {
            log::debug!("round won, next target {}", self.target);
            PickOutcome::RoundWon
        }
    }

    fn draw_target(&mut self) {
        use rand::prelude::*;

        let values: Vec<TileValue> = self.board.uncleared().map(|tile| tile.value).collect();
        let (chain_min, chain_max) = self.preset.chain_bounds;
        // target draws get their own stream, offset past the board stream,
        // so a restored session redraws the same sequence
        let mut rng = SmallRng::seed_from_u64(
            self.seed
                .wrapping_add(u64::from(self.rounds))
                .wrapping_add(1),
        );
        self.rounds += 1;
        self.target = generate_target(
            &values,
            usize::from(chain_min),
            usize::from(chain_max),
            &mut rng,
        );
    }
}
