use achievement_randomiser_core::bosses::BossId;
use achievement_randomiser_core::detection::default_event_bus;
use achievement_randomiser_core::ids::{Challenge, Character, LevelStage, StageType};
use achievement_randomiser_core::objective::CharacterObjectiveKind;
use achievement_randomiser_core::{Achievements, HostEvent, Objective, RandomiserMode, Tracker};

fn tracker() -> Tracker {
    let achievements = Achievements::generate(2024, RandomiserMode::Standard).unwrap();
    Tracker::for_seed(2024, RandomiserMode::Standard, achievements)
}

#[test]
fn boss_kill_grants_its_paired_unlock() {
    let bus = default_event_bus();
    let mut tracker = tracker();
    let objective = Objective::character(Character::Isaac, CharacterObjectiveKind::Mom);
    let expected = tracker.achievements().unlock_for(&objective).unwrap();

    let event = HostEvent::BossRoomCleared {
        player_type: Character::Isaac.player_type(),
        boss: BossId::Mom,
        stage_type: StageType::Original,
        is_last_boss_room: true,
    };
    assert_eq!(bus.dispatch(&event, &mut tracker), vec![expected]);
    assert!(tracker.is_objective_completed(&objective));

    // Repeated events are idempotent.
    assert!(bus.dispatch(&event, &mut tracker).is_empty());
    assert_eq!(tracker.ledger().len(), 1);
}

#[test]
fn esau_completes_jacob_objectives() {
    let bus = default_event_bus();
    let mut tracker = tracker();
    let event = HostEvent::FloorCleared {
        player_type: 20,
        stage: LevelStage::Womb1,
        stage_type: StageType::RepentanceA,
        took_hit: false,
        challenge: None,
    };
    bus.dispatch(&event, &mut tracker);
    assert!(tracker.is_objective_completed(&Objective::character(
        Character::Jacob,
        CharacterObjectiveKind::NoHitCorpse1
    )));
}

#[test]
fn challenge_and_boss_timer_events() {
    let bus = default_event_bus();
    let mut tracker = tracker();

    bus.dispatch(
        &HostEvent::ChallengeCompleted {
            challenge: Challenge::Purist,
        },
        &mut tracker,
    );
    bus.dispatch(
        &HostEvent::BossNoHitTimer {
            boss: BossId::Gurdy,
            seconds_without_hit: 600,
        },
        &mut tracker,
    );

    let recent = tracker.recent_achievements(2);
    assert_eq!(recent[0].0, Objective::Boss { boss: BossId::Gurdy });
    assert_eq!(
        recent[1].0,
        Objective::Challenge {
            challenge: Challenge::Purist
        }
    );
}

#[test]
fn ended_tracker_ignores_events() {
    let bus = default_event_bus();
    let mut tracker = tracker();
    tracker.end();
    let event = HostEvent::BeastDefeated { player_type: 0 };
    assert!(bus.dispatch(&event, &mut tracker).is_empty());
    assert!(tracker.ledger().is_empty());
}
