//! # Setup Module
//!
//! Seeded construction of a game session: catalogue shuffles, weapon
//! placement, envelope selection, seat assignment, dealing, and placement of
//! identities nobody plays.
//!
//! All draws come from the session's single [`RandomSource`] in a fixed order,
//! so a seed fully determines the resulting game.

pub mod deal;
pub mod random;

pub use random::*;

use crate::config::{DEFAULT_SEED, MAX_PARTICIPANTS, MIN_PARTICIPANTS};
use crate::{CluedoError, CluedoResult, GameWorld};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Inputs for a complete setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    /// Random seed for reproducible setup
    pub seed: u64,
    /// Names of the human participants, in seat order
    pub participants: Vec<String>,
}

impl SetupConfig {
    /// Creates a configuration for the given seed and participant names.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluedo::SetupConfig;
    ///
    /// let config = SetupConfig::new(42, ["Casey", "Linus", "Ada"]);
    /// assert_eq!(config.participants.len(), 3);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new<I, S>(seed: u64, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            seed,
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }

    /// Checks the participant list before any draw is made.
    ///
    /// # Errors
    ///
    /// [`CluedoError::SetupInvariant`] for fewer than two or more than six
    /// names, a blank name, or a duplicate name.
    pub fn validate(&self) -> CluedoResult<()> {
        validate_participants(&self.participants)
    }
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEED, ["Player 1", "Player 2", "Player 3"])
    }
}

pub(crate) fn validate_participants(names: &[String]) -> CluedoResult<()> {
    if names.len() < MIN_PARTICIPANTS {
        return Err(CluedoError::SetupInvariant(format!(
            "at least {} participants are required, got {}",
            MIN_PARTICIPANTS,
            names.len()
        )));
    }
    if names.len() > MAX_PARTICIPANTS {
        return Err(CluedoError::SetupInvariant(format!(
            "at most {} participants can play, got {}",
            MAX_PARTICIPANTS,
            names.len()
        )));
    }
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(CluedoError::SetupInvariant(
                "participant names must not be blank".to_string(),
            ));
        }
        if !seen.insert(name.as_str()) {
            return Err(CluedoError::SetupInvariant(format!(
                "duplicate participant name: {}",
                name
            )));
        }
    }
    Ok(())
}

impl GameWorld {
    /// Runs every setup step for `config` and returns a world ready for turns.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluedo::{GameWorld, SetupConfig, SetupStage};
    ///
    /// let world = GameWorld::setup(&SetupConfig::new(42, ["Casey", "Linus"])).unwrap();
    /// assert_eq!(world.stage(), SetupStage::Ready);
    /// assert_eq!(world.occupants().len(), 6);
    /// ```
    pub fn setup(config: &SetupConfig) -> CluedoResult<Self> {
        config.validate()?;
        let mut world = Self::initialize(config.seed)?;
        world.distribute_characters(&config.participants)?;
        world.distribute_cards()?;
        world.set_characters()?;
        Ok(world)
    }
}
