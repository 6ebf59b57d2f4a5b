//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, bottom to top)
//! - **Spawn anchor**: column 4, row 19 (the top row)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval used by the terminal runner |
//! | `DROP_INTERVAL_MS` | 500 | Gravity: one row every half second |
//! | `KEY_DEBOUNCE_MS` | 10 | Minimum gap between accepted key repeats |
//!
//! # Examples
//!
//! ```
//! use fruitris_types::{fruit_to_u8, Fruit, BOARD_CELLS, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(BOARD_CELLS, 200);
//! assert_eq!(fruit_to_u8(None), 0);
//! assert_eq!(Fruit::Lime.as_str(), "lime");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

/// Topmost row index. A lock attempt with the anchor here ends the game.
pub const TOP_ROW: i8 = BOARD_HEIGHT as i8 - 1;

/// Anchor column for freshly spawned pieces
pub const SPAWN_COL: i8 = 4;

/// Anchor row for freshly spawned pieces
pub const SPAWN_ROW: i8 = TOP_ROW;

/// Frame interval for the terminal runner (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval (one row every 500ms)
pub const DROP_INTERVAL_MS: u32 = 500;

/// Key auto-repeat events closer together than this are dropped
pub const KEY_DEBOUNCE_MS: u32 = 10;

/// Shortest run of same-kind fruit that clears
pub const STREAK_MIN: usize = 3;


/// The fruit kinds a piece cell or board cell can hold
///
/// Each kind has a fixed display colour (see [`Fruit::rgb`]):
/// - **Cherry**: red
/// - **Orange**: orange
/// - **Banana**: yellow
/// - **Lime**: green
/// - **Blueberry**: blue
/// - **Grape**: purple
///
/// Emptiness is not a fruit: an empty cell is `None` (see [`Cell`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fruit {
    Cherry,
    Orange,
    Banana,
    Lime,
    Blueberry,
    Grape,
}

impl Fruit {
    /// Every fruit kind, in display order
    pub const ALL: [Fruit; 6] = [
        Fruit::Cherry,
        Fruit::Orange,
        Fruit::Banana,
        Fruit::Lime,
        Fruit::Blueberry,
        Fruit::Grape,
    ];

    /// Lowercase name, as shown in the legend
    pub fn as_str(&self) -> &'static str {
        match self {
            Fruit::Cherry => "cherry",
            Fruit::Orange => "orange",
            Fruit::Banana => "banana",
            Fruit::Lime => "lime",
            Fruit::Blueberry => "blueberry",
            Fruit::Grape => "grape",
        }
    }

    /// Fixed display colour as an `[r, g, b]` triple
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Fruit::Cherry => [220, 40, 60],
            Fruit::Orange => [255, 150, 30],
            Fruit::Banana => [245, 225, 70],
            Fruit::Lime => [110, 210, 70],
            Fruit::Blueberry => [70, 100, 230],
            Fruit::Grape => [160, 80, 200],
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Fruit)`: Cell filled with the specified fruit
pub type Cell = Option<Fruit>;

/// Compact cell code for snapshots and hashing (0 = empty, 1.. = fruit)
pub fn fruit_to_u8(cell: Cell) -> u8 {
    match cell {
        None => 0,
        Some(Fruit::Cherry) => 1,
        Some(Fruit::Orange) => 2,
        Some(Fruit::Banana) => 3,
        Some(Fruit::Lime) => 4,
        Some(Fruit::Blueberry) => 5,
        Some(Fruit::Grape) => 6,
    }
}

/// The seven tetromino shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// Every shape kind
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];
}

/// Game actions that can be applied to modify game state
///
/// Every player intent maps to exactly one action. Gravity is not an action;
/// it is driven by `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down (never locks)
    MoveDown,
    /// Rotate piece 90° about its anchor
    Rotate,
    /// Re-roll the fruit of all four piece cells
    Shuffle,
    /// Toggle pause state
    Pause,
    /// Clear the board and start over
    Reset,
}

/// How many resolution passes run after a lock
///
/// - **Single**: one pass (at most one full row, one column streak, one row streak)
/// - **Cascade**: repeat passes until the board stops changing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPolicy {
    #[default]
    Single,
    Cascade,
}

impl ClearPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" => Some(ClearPolicy::Single),
            "cascade" => Some(ClearPolicy::Cascade),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClearPolicy::Single => "single",
            ClearPolicy::Cascade => "cascade",
        }
    }
}

/// Core-side event emitted after a lock attempt.
///
/// Consumed once by observers (the event log) via `take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub piece_id: u32,
    pub rows_cleared: u32,
    pub streaks_cleared: u32,
    pub cells_cleared: u32,
    pub passes: u32,
    pub game_over: bool,
}
