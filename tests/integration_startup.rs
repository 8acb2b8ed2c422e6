//! Integration test to ensure a session can be set up and played without errors.

use cluedo::{
    CluedoResult, Direction, GameCompletionState, GameWorld, Occupant, SetupConfig, SetupStage,
    TurnPhase,
};

#[test]
fn test_basic_startup() -> CluedoResult<()> {
    let config = SetupConfig::new(12345, ["Casey", "Linus", "Ada", "Grace"]);
    let world = GameWorld::setup(&config)?;

    assert_eq!(world.stage(), SetupStage::Ready);
    assert_eq!(world.turn_number(), 0);
    assert_eq!(world.current_turn(), None);
    assert_eq!(world.completion(), &GameCompletionState::Playing);
    assert_eq!(world.human_count(), 4);

    // Humans stand on their identity's start cell
    for participant in world.participants() {
        assert_eq!(participant.position(), Some(participant.identity().start()));
        assert_eq!(participant.phase(), TurnPhase::Idle);
    }

    // Unplayed identities wait inside rooms
    for occupant in world.occupants() {
        if let Occupant::Unassigned(placeholder) = occupant {
            let room = world.room_of_identity(placeholder.identity).unwrap();
            let position = placeholder.position.unwrap();
            assert_eq!(world.board().room_at(position), Some(room));
            assert!(world.board().door_at(position).is_none());
        }
    }

    Ok(())
}

#[test]
fn test_steps_must_be_called_in_order() -> CluedoResult<()> {
    let mut world = GameWorld::initialize(7)?;
    assert_eq!(world.stage(), SetupStage::Initialized);
    assert!(world.distribute_cards().is_err());
    assert!(world.set_characters().is_err());

    world.distribute_characters(&["Casey", "Linus"])?;
    assert!(world.distribute_characters(&["Ada"]).is_err());
    world.distribute_cards()?;
    world.set_characters()?;
    assert_eq!(world.stage(), SetupStage::Ready);
    Ok(())
}

#[test]
fn test_a_full_round_of_turns() -> CluedoResult<()> {
    let mut world = GameWorld::setup(&SetupConfig::new(3, ["Casey", "Linus", "Ada"]))?;

    for _ in 0..3 {
        let seat = world.advance_turn()?;
        let moves = world.roll_moves();
        let mut steps = world.begin_turn(seat, moves)?;
        while world.participant(seat).map(|p| p.phase()) == Some(TurnPhase::Moving) {
            match Direction::cardinal()
                .into_iter()
                .find(|&direction| steps.get(direction).is_some())
            {
                Some(direction) => steps = world.move_player(seat, direction)?.legal_next_steps,
                None => break,
            }
        }
        world.end_turn(seat)?;
    }

    assert_eq!(world.turn_number(), 3);
    assert_eq!(world.current_turn(), Some(2));
    Ok(())
}

#[test]
fn test_snapshot_round_trip_after_setup() -> CluedoResult<()> {
    let world = GameWorld::setup(&SetupConfig::default())?;
    let json = world.snapshot_json()?;
    let snapshot = cluedo::GameSnapshot::from_json(&json)?;
    assert_eq!(snapshot, world.snapshot());
    Ok(())
}
