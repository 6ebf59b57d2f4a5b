//! Game state module - manages the complete game state
//!
//! Ties together board, falling piece, RNG and the resolution pipeline, and drives
//! them as a small state machine:
//!
//! - **Falling**: gravity ticks, moves, rotation and shuffling all apply
//! - **Paused**: gravity is frozen; moves, rotation and shuffling still apply
//! - **GameOver**: everything but `reset` is rejected
//!
//! Gravity is time-gated: `tick` accumulates elapsed milliseconds and, once the drop
//! interval is reached, either moves the piece down a row or locks it when the floor
//! or a locked cell is directly below.

use crate::collision::{self, Side};
use crate::resolve;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::*;
use crate::{Board, Piece, SimpleRng};

/// Scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Falling,
    Paused,
    GameOver,
}

/// Tunables for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub drop_interval_ms: u32,
    pub clear_policy: ClearPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            drop_interval_ms: DROP_INTERVAL_MS,
            clear_policy: ClearPolicy::Single,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    piece: Piece,
    phase: Phase,
    rng: SimpleRng,
    config: GameConfig,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Monotonic id for spawned pieces.
    piece_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    drop_timer_ms: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed and default tunables
    pub fn new(seed: u32) -> Self {
        Self::with_config(GameConfig {
            seed,
            ..GameConfig::default()
        })
    }

    /// Create a new game and spawn its first piece
    pub fn with_config(config: GameConfig) -> Self {
        assert!(config.drop_interval_ms > 0, "drop interval must be positive");

        let mut rng = SimpleRng::new(config.seed);
        let piece = Piece::spawn(&mut rng);

        Self {
            board: Board::new(),
            piece,
            phase: Phase::Falling,
            rng,
            config,
            episode_id: 0,
            piece_id: 1,
            last_event: None,
            drop_timer_ms: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// False while paused
    pub fn running(&self) -> bool {
        self.phase != Phase::Paused
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_piece(&mut self, piece: Piece) {
        self.piece = piece;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.cells();
        out.piece = PieceSnapshot::from(self.piece);
        out.running = self.running();
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
        out.piece_id = self.piece_id;
        out.seed = self.config.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Moves, rotation and shuffling are accepted while falling or paused
    fn accepts_input(&self) -> bool {
        self.phase != Phase::GameOver
    }

    /// Spawn the next piece; ends the game if it does not fit
    fn spawn_piece(&mut self) -> bool {
        let piece = Piece::spawn(&mut self.rng);
        self.piece = piece;
        self.piece_id = self.piece_id.wrapping_add(1);
        self.drop_timer_ms = 0;

        if !collision::fits(&piece, &self.board) {
            self.phase = Phase::GameOver;
            return false;
        }

        true
    }

    /// Shift the piece towards `side` if nothing blocks it
    fn try_shift(&mut self, side: Side) -> bool {
        if !self.accepts_input() || collision::is_blocked(&self.piece, &self.board, side) {
            return false;
        }

        let (dc, dr) = side.delta();
        self.piece = self.piece.shifted(dc, dr);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(Side::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(Side::Right)
    }

    /// Soft drop by one row. Never locks; a grounded piece stays put.
    pub fn move_down(&mut self) -> bool {
        self.try_shift(Side::Bottom)
    }

    /// Rotate about the anchor if the rotated copy lands in free cells with nothing touching it
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }

        let rotated = self.piece.rotated();
        if !collision::fits(&rotated, &self.board)
            || collision::classify(&rotated, &self.board) != collision::Collision::Clear
        {
            return false;
        }

        self.piece = rotated;
        true
    }

    /// Re-roll the fruit of all four cells
    pub fn shuffle_fruits(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }

        self.piece = self.piece.shuffled(&mut self.rng);
        true
    }

    /// Flip between falling and paused; no-op after game over
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Falling => Phase::Paused,
            Phase::Paused => Phase::Falling,
            Phase::GameOver => return false,
        };
        true
    }

    /// Clear the board and start a new episode, continuing the RNG stream
    pub fn reset(&mut self) {
        let next_episode = self.episode_id.wrapping_add(1);
        let config = GameConfig {
            seed: self.rng.state(),
            ..self.config
        };
        *self = Self::with_config(config);
        self.episode_id = next_episode;
    }

    /// Lock the piece and run the resolution pipeline.
    ///
    /// A lock attempt with the anchor on the top row ends the game instead, leaving the
    /// board untouched.
    pub(crate) fn lock_piece(&mut self) {
        if !self.accepts_input() {
            return;
        }

        if self.piece.row >= TOP_ROW {
            self.phase = Phase::GameOver;
            self.last_event = Some(LockEvent {
                piece_id: self.piece_id,
                rows_cleared: 0,
                streaks_cleared: 0,
                cells_cleared: 0,
                passes: 0,
                game_over: true,
            });
            return;
        }

        resolve::merge_piece(&mut self.board, &self.piece);
        let passes = resolve::resolve(&mut self.board, self.config.clear_policy);

        let mut event = LockEvent {
            piece_id: self.piece_id,
            rows_cleared: 0,
            streaks_cleared: 0,
            cells_cleared: 0,
            passes: passes.len() as u32,
            game_over: false,
        };
        for report in &passes {
            event.rows_cleared += report.rows_cleared();
            event.streaks_cleared += report.streaks_cleared();
            event.cells_cleared += report.cells_cleared();
        }

        if !self.spawn_piece() {
            event.game_over = true;
        }
        self.last_event = Some(event);
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance gravity by `elapsed_ms`. Returns true if the piece moved or locked.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.config.drop_interval_ms {
            return false;
        }
        self.drop_timer_ms = 0;

        if collision::is_blocked(&self.piece, &self.board, Side::Bottom) {
            self.lock_piece();
        } else {
            self.piece = self.piece.shifted(0, -1);
        }
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
            GameAction::Shuffle => self.shuffle_fruits(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
