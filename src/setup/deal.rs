//! # Shuffle & Deal
//!
//! The setup steps, in draw order:
//!
//! 1. shuffle weapons
//! 2. shuffle rooms and pair `weapons[i]` with `rooms[i]`
//! 3. shuffle weapons again
//! 4. shuffle identities
//! 5. build the 21 cards, bucket them by kind, shuffle the combined deck
//! 6. seal the envelope from the shuffled deck
//! 7. shuffle identities and fill the six seats ([`GameWorld::distribute_characters`])
//! 8. shuffle each card pool and deal round-robin ([`GameWorld::distribute_cards`])
//! 9. shuffle rooms and place unplayed identities ([`GameWorld::set_characters`])
//!
//! Reordering any of these draws changes every game produced from a seed.

use crate::config::MAX_PARTICIPANTS;
use crate::{
    validate_participants, Card, CluedoError, CluedoResult, Envelope, GameCompletionState,
    GameWorld, IdentityId, Occupant, Participant, Placeholder, RandomSource, Relations, Room,
    RoomId, SeededSource, SetupStage, WeaponId,
};
use log::{debug, info};
use rand::seq::SliceRandom;

impl GameWorld {
    /// Builds a session from `seed`: catalogue shuffles, weapon placement and
    /// the sealed envelope (steps 1 to 6).
    ///
    /// # Examples
    ///
    /// ```
    /// use cluedo::GameWorld;
    ///
    /// let a = GameWorld::initialize(42).unwrap();
    /// let b = GameWorld::initialize(42).unwrap();
    /// assert_eq!(a.envelope(), b.envelope());
    /// assert_eq!(a.cards().len(), 18);
    /// ```
    pub fn initialize(seed: u64) -> CluedoResult<Self> {
        Self::with_source(seed, Box::new(SeededSource::new(seed)))
    }

    /// Same as [`GameWorld::initialize`] but drawing from a caller-supplied
    /// source. `seed` is only recorded for snapshots.
    pub fn with_source(seed: u64, mut rng: Box<dyn RandomSource>) -> CluedoResult<Self> {
        let mut weapons: Vec<WeaponId> = WeaponId::all().collect();
        weapons.shuffle(&mut *rng);

        let mut rooms: Vec<Room> = RoomId::all().map(Room::from_catalogue).collect();
        rooms.shuffle(&mut *rng);

        let mut relations = Relations::new();
        for (room, &weapon) in rooms.iter().zip(&weapons) {
            relations.place_weapon(weapon, room.id);
        }

        weapons.shuffle(&mut *rng);

        let mut identities: Vec<IdentityId> = IdentityId::all().collect();
        identities.shuffle(&mut *rng);

        let mut cards: Vec<Card> = rooms
            .iter()
            .map(|room| Card::Room(room.id))
            .chain(weapons.iter().copied().map(Card::Weapon))
            .chain(identities.iter().copied().map(Card::Identity))
            .collect();

        let mut room_cards: Vec<Card> = Vec::new();
        let mut weapon_cards: Vec<Card> = Vec::new();
        let mut identity_cards: Vec<Card> = Vec::new();
        for &card in &cards {
            match card {
                Card::Room(_) => room_cards.push(card),
                Card::Weapon(_) => weapon_cards.push(card),
                Card::Identity(_) => identity_cards.push(card),
            }
        }

        cards.shuffle(&mut *rng);

        let envelope = select_envelope(&cards)?;
        for pool in [
            &mut cards,
            &mut room_cards,
            &mut weapon_cards,
            &mut identity_cards,
        ] {
            pool.retain(|&card| !envelope.contains(card));
        }

        debug!("Envelope sealed after {} draws: {}", rng.draws(), envelope);
        info!(
            "Initialized game with seed {} ({} cards left to deal)",
            seed,
            cards.len()
        );

        Ok(Self {
            seed,
            board: crate::Board::standard(),
            rooms,
            weapons,
            identities,
            cards,
            room_cards,
            weapon_cards,
            identity_cards,
            envelope,
            occupants: Vec::new(),
            relations,
            rng,
            stage: SetupStage::Initialized,
            turn_number: 0,
            current_turn: None,
            completion: GameCompletionState::Playing,
        })
    }

    /// Shuffles identities and fills the six seats: the first `names.len()`
    /// seats go to humans, the rest become placeholders holding the leftover
    /// identities. Human tokens start on their identity's start cell.
    ///
    /// # Errors
    ///
    /// [`CluedoError::SetupInvariant`] if seats were already filled or the
    /// name list is empty, too long, blank or duplicated.
    pub fn distribute_characters<S: AsRef<str>>(&mut self, names: &[S]) -> CluedoResult<()> {
        self.expect_stage(SetupStage::Initialized, "distribute characters")?;
        let names: Vec<String> = names.iter().map(|name| name.as_ref().to_string()).collect();
        validate_participants(&names)?;

        self.identities.shuffle(&mut *self.rng);

        self.occupants = self
            .identities
            .iter()
            .take(MAX_PARTICIPANTS)
            .enumerate()
            .map(|(seat, &identity)| match names.get(seat) {
                Some(name) => {
                    let mut participant = Participant::new(name.clone(), identity);
                    participant.place(identity.start());
                    Occupant::Human(participant)
                }
                None => Occupant::Unassigned(Placeholder {
                    identity,
                    position: None,
                }),
            })
            .collect();

        for occupant in &self.occupants {
            debug!("Seat {:?} plays {}", occupant.name(), occupant.identity());
        }
        info!(
            "Distributed characters to {} participants and {} placeholders",
            names.len(),
            self.occupants.len() - names.len()
        );

        self.stage = SetupStage::CharactersDistributed;
        Ok(())
    }

    /// Shuffles the room, weapon and identity pools independently and deals
    /// each round-robin across the human seats. Placeholders get no cards.
    ///
    /// # Errors
    ///
    /// [`CluedoError::SetupInvariant`] when run out of order or with no
    /// human seat to deal to.
    pub fn distribute_cards(&mut self) -> CluedoResult<()> {
        self.expect_stage(SetupStage::CharactersDistributed, "distribute cards")?;
        let humans = self.human_count();
        if humans == 0 {
            return Err(CluedoError::SetupInvariant(
                "cannot deal cards without participants".to_string(),
            ));
        }

        self.room_cards.shuffle(&mut *self.rng);
        self.weapon_cards.shuffle(&mut *self.rng);
        self.identity_cards.shuffle(&mut *self.rng);

        let pools = [
            self.room_cards.clone(),
            self.weapon_cards.clone(),
            self.identity_cards.clone(),
        ];
        for pool in &pools {
            for (index, &card) in pool.iter().enumerate() {
                let seat = index % humans;
                let participant = self.participant_mut(seat).ok_or_else(|| {
                    CluedoError::SetupInvariant(format!("seat {} is not a participant", seat))
                })?;
                participant.add_card(card);
            }
        }

        for participant in self.participants() {
            debug!("{} holds {} cards", participant.name(), participant.hand().len());
        }

        self.stage = SetupStage::CardsDealt;
        Ok(())
    }

    /// Shuffles rooms and puts every placeholder seat's identity into the room
    /// at the same index, registering the room link and placing the token on
    /// the first free interior cell.
    ///
    /// # Errors
    ///
    /// [`CluedoError::SetupInvariant`] when run out of order or when a room
    /// has no free cell left.
    pub fn set_characters(&mut self) -> CluedoResult<()> {
        self.expect_stage(SetupStage::CardsDealt, "place characters")?;

        self.rooms.shuffle(&mut *self.rng);

        for seat in 0..self.occupants.len() {
            let identity = match &self.occupants[seat] {
                Occupant::Unassigned(placeholder) => placeholder.identity,
                Occupant::Human(_) => continue,
            };
            let room = self.rooms.get(seat).map(|room| room.id).ok_or_else(|| {
                CluedoError::SetupInvariant(format!("no room left for seat {}", seat))
            })?;
            let cell = self.free_cell_in(room).ok_or_else(|| {
                CluedoError::SetupInvariant(format!("{} has no free cell", room))
            })?;

            self.relations.place_identity(identity, room);
            if let Occupant::Unassigned(placeholder) = &mut self.occupants[seat] {
                placeholder.position = Some(cell);
            }
            debug!("Placed unplayed {} in the {} at {}", identity, room, cell);
        }

        info!("Setup complete for seed {}", self.seed);
        self.stage = SetupStage::Ready;
        Ok(())
    }

    fn expect_stage(&self, expected: SetupStage, action: &str) -> CluedoResult<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(CluedoError::SetupInvariant(format!(
                "cannot {} at stage {:?}, expected {:?}",
                action, self.stage, expected
            )))
        }
    }
}

/// Picks the envelope from a shuffled deck.
///
/// One pass fills the slots in priority order: until a room card is found only
/// room cards are taken, then only weapon cards, then only identity cards. If
/// the pass ends with a slot still empty, that slot takes the first card of
/// its kind in deck order.
pub(crate) fn select_envelope(cards: &[Card]) -> CluedoResult<Envelope> {
    let mut room = None;
    let mut weapon = None;
    let mut identity = None;

    for &card in cards {
        match (room, weapon, identity, card) {
            (None, _, _, Card::Room(id)) => room = Some(id),
            (Some(_), None, _, Card::Weapon(id)) => weapon = Some(id),
            (Some(_), Some(_), None, Card::Identity(id)) => identity = Some(id),
            _ => {}
        }
        if room.is_some() && weapon.is_some() && identity.is_some() {
            break;
        }
    }

    let room = room.or_else(|| {
        cards.iter().find_map(|card| match card {
            Card::Room(id) => Some(*id),
            _ => None,
        })
    });
    let weapon = weapon.or_else(|| {
        cards.iter().find_map(|card| match card {
            Card::Weapon(id) => Some(*id),
            _ => None,
        })
    });
    let identity = identity.or_else(|| {
        cards.iter().find_map(|card| match card {
            Card::Identity(id) => Some(*id),
            _ => None,
        })
    });

    match (room, weapon, identity) {
        (Some(room), Some(weapon), Some(identity)) => Ok(Envelope::new(room, weapon, identity)),
        _ => Err(CluedoError::SetupInvariant(
            "deck is missing a card kind for the envelope".to_string(),
        )),
    }
}
