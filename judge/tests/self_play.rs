use contrast::{Intent, Mode, Side};
use judge::{play_game, GameResult, PlayerKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn self_play_games_replay() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut players = [PlayerKind::Random.build(1), PlayerKind::Greedy.build(2)];
    for _ in 0..50 {
        let report = play_game(&mut rng, &mut players, 100, &mut None).unwrap();
        assert!(
            matches!(report.result, GameResult::Stalled { .. }),
            "unexpected result {:?}",
            report.result
        );
        assert_eq!(report.recording.intents[0], Intent::Start);
        let engine = report.recording.replay().unwrap();
        assert_eq!(engine, report.recording.final_state);
        // Each side only has three tiles, so no game lasts longer than six turns
        let placed = engine
            .board()
            .iter()
            .filter(|(_, _, cell)| cell.tile() != 0)
            .count();
        assert!(placed <= 6);
        assert_eq!(placed + engine.inventory().len(), 6);
        assert!(!engine.can_complete_turn());
    }
}

#[test]
fn turn_limit_ends_game() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut players = [PlayerKind::Greedy.build(5), PlayerKind::Greedy.build(6)];
    let report = play_game(&mut rng, &mut players, 2, &mut None).unwrap();
    assert_eq!(report.result, GameResult::TurnLimitReached { turns: 2 });
    let engine = report.recording.final_state;
    assert_eq!(engine.mode(), Mode::PieceSelecting);
    assert_eq!(engine.inventory().len(), 4);
    for side in [Side::Positive, Side::Negative] {
        assert_eq!(engine.inventory().for_side(side).count(), 2);
    }
}

#[test]
fn tampered_recording_is_rejected() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut players = [PlayerKind::Random.build(1), PlayerKind::Random.build(2)];
    let mut recording = play_game(&mut rng, &mut players, 3, &mut None)
        .unwrap()
        .recording;
    recording.intents.pop();
    assert!(recording.replay().is_err());
    recording.intents.push(Intent::Cell { i: 9, j: 9 });
    assert!(recording.replay().is_err());
}
