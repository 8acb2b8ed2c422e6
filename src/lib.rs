//! # Cluedo Engine
//!
//! Deterministic game-state engine for a six-suspect deduction board game.
//!
//! ## Architecture Overview
//!
//! The engine owns every piece of mutable game state inside one [`GameWorld`]
//! aggregate. Collaborators (menus, renderers, network layers) call into it and
//! read [`GameSnapshot`]s back.
//!
//! - **Catalogue**: the fixed rooms, weapons, identities, doors and start cells
//! - **Setup**: seeded shuffling, envelope selection and dealing
//! - **Board**: cell classification, doors and shortcut links
//! - **Movement**: per-step validation, move budgets and room transitions
//! - **Turns**: scheduling, dice and accusations
//!
//! All randomness flows through a single [`RandomSource`] so that the same seed
//! always reproduces the same game.

pub mod game;
pub mod setup;

pub use game::*;
pub use setup::*;

/// Core error type for the engine.
#[derive(thiserror::Error, Debug)]
pub enum CluedoError {
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A caller supplied an out-of-range value, such as a move count
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Destination failed validation; the mover's state is unchanged
    #[error("Illegal move to ({}, {}): {reason}", to.x, to.y)]
    IllegalMove {
        /// Cell the participant tried to reach
        to: Position,
        /// Why the step was refused
        reason: MoveRejection,
    },

    /// Setup was attempted with inconsistent inputs or out of order
    #[error("Setup invariant violated: {0}")]
    SetupInvariant(String),

    /// Operation is not allowed in the current game state
    #[error("Invalid game state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the engine.
pub type CluedoResult<T> = Result<T, CluedoError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Board width in cells
    pub const BOARD_WIDTH: u32 = 25;

    /// Board height in cells
    pub const BOARD_HEIGHT: u32 = 25;

    /// Smallest move budget a roll can produce
    pub const MIN_MOVES: u8 = 2;

    /// Largest move budget a roll can produce
    pub const MAX_MOVES: u8 = 12;

    /// Fewest humans a game can be set up with
    pub const MIN_PARTICIPANTS: usize = 2;

    /// Number of seats; identities beyond the human count become placeholders
    pub const MAX_PARTICIPANTS: usize = 6;

    /// Display name of a seat no human has claimed
    pub const PLACEHOLDER_NAME: &str = "none";

    /// Seed used when none is supplied
    pub const DEFAULT_SEED: u64 = 42;
}
