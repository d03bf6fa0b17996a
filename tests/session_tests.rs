//! Session tests: command handling, history, snapshots and card pools.

use circle_battle::{
    BattleCommand, BattleConfig, BattleEngine, BattleSession, BattleSnapshot, CardPool, CardRecord, Combatant,
    GameRng, InMemoryCardPool, PoolError, Rejection, SessionError,
};

fn roster(prefix: &str, n: usize) -> Vec<Combatant> {
    (0..n)
        .map(|i| Combatant::new(format!("{prefix}{i}"), format!("{prefix} {i}"), 400, 100))
        .collect()
}

fn start() -> BattleCommand {
    BattleCommand::Start {
        my_side: "Home".to_string(),
        my_roster: roster("m", 5),
        opponent_side: "Away".to_string(),
        opponent_roster: roster("o", 5),
    }
}

fn session(seed: u64) -> BattleSession {
    BattleSession::new("battle-1", BattleEngine::default(), GameRng::new(seed))
}

#[test]
fn test_commands_before_start_fail() {
    let mut session = session(1);

    assert!(matches!(session.execute(BattleCommand::Attack), Err(SessionError::NotStarted)));
    assert!(matches!(
        session.execute(BattleCommand::Retreat { bench_index: 0 }),
        Err(SessionError::NotStarted)
    ));
    assert!(matches!(session.snapshot(), Err(SessionError::NotStarted)));
    assert_eq!(session.turn(), 0);
    assert!(session.history().is_empty());
}

#[test]
fn test_start_then_attack() {
    let mut session = session(2);

    let state = session.execute(start()).unwrap();
    assert_eq!(state.turn, 1);
    assert_eq!(state.latest_log(), Some("Battle Start! Home vs Away"));

    let state = session.execute(BattleCommand::Attack).unwrap();
    assert_eq!(state.turn, 2);
    assert_eq!(session.history().len(), 2);
    assert!(session.history().iter().all(|r| r.applied()));
    assert_eq!(session.history()[1].turn, 1);
}

#[test]
fn test_rejections_are_recorded() {
    let mut session = session(3);
    session.execute(start()).unwrap();

    let state = session.execute(BattleCommand::Retreat { bench_index: 9 }).unwrap();
    assert_eq!(state.turn, 1);

    let record = session.history().last().unwrap();
    assert!(!record.applied());
    assert_eq!(
        record.rejection,
        Some(Rejection::InvalidBenchIndex { index: 9, bench_len: 4 })
    );
}

#[test]
fn test_restart_clears_history() {
    let mut session = session(4);
    session.execute(start()).unwrap();
    session.execute(BattleCommand::Attack).unwrap();

    let state = session.execute(start()).unwrap();
    assert_eq!(state.turn, 1);
    assert_eq!(state.logs.len(), 1);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_stale_turn_is_refused() {
    let mut session = session(5);
    session.execute(start()).unwrap();
    session.execute_at(1, BattleCommand::Attack).unwrap();

    let err = session.execute_at(1, BattleCommand::Attack).unwrap_err();
    assert!(matches!(err, SessionError::StaleTurn { expected: 1, actual: 2 }));
    assert_eq!(session.turn(), 2);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_snapshot_resumes_identically() {
    let mut original = session(6);
    original.execute(start()).unwrap();
    original.execute(BattleCommand::Attack).unwrap();

    let bytes = original.snapshot().unwrap().to_bytes().unwrap();
    let snapshot = BattleSnapshot::from_bytes(&bytes).unwrap();
    assert_eq!(snapshot, original.snapshot().unwrap());

    let mut restored = BattleSession::restore(BattleEngine::default(), snapshot);
    assert_eq!(restored.battle_id(), "battle-1");
    assert_eq!(restored.history(), original.history());

    for command in [
        BattleCommand::Attack,
        BattleCommand::Retreat { bench_index: 1 },
        BattleCommand::Attack,
    ] {
        let expected = original.execute(command.clone()).unwrap().clone();
        let actual = restored.execute(command).unwrap().clone();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_garbage_snapshot_is_an_error() {
    let result = BattleSnapshot::from_bytes(&[1, 2, 3]);
    assert!(matches!(result, Err(SessionError::Snapshot(_))));
}

fn pool() -> InMemoryCardPool {
    let mut pool = InMemoryCardPool::new(&BattleConfig::default().roster);
    pool.add_circle("chess", "Chess Club");
    pool.add_circle("go", "Go Club");
    for i in 0..3 {
        pool.add_card(CardRecord::new(format!("chess-{i}"), format!("Knight {i}"), 2, "chess"));
        pool.add_card(CardRecord::new(format!("go-{i}"), format!("Stone {i}"), 3, "go"));
    }
    pool
}

#[test]
fn test_start_from_pool() {
    let pool = pool();
    let mut session = session(7);

    let state = session.start_from_pool(&pool, "chess", "go").unwrap();

    assert_eq!(state.latest_log(), Some("Battle Start! Chess Club vs Go Club"));
    assert_eq!(state.my_deck().len(), 5);
    assert_eq!(state.my_deck().iter().filter(|c| c.id.as_str().starts_with("chess-")).count(), 3);
    assert_eq!(state.opponent_deck().iter().filter(|c| c.grade == 3).count(), 3);
}

#[test]
fn test_start_from_pool_unknown_circle() {
    let pool = pool();
    let mut session = session(8);

    let err = session.start_from_pool(&pool, "chess", "drama").unwrap_err();
    assert!(matches!(err, SessionError::Pool(PoolError::UnknownSide(ref id)) if id == "drama"));
    assert!(session.state().is_none());
}

#[test]
fn test_start_from_pool_with_mock_fallback() {
    let pool = pool();
    let engine = BattleEngine::new(BattleConfig::default().with_mock_fallback(true));
    let mut session = BattleSession::new("battle-2", engine, GameRng::new(9));

    let state = session.start_from_pool(&pool, "chess", "drama").unwrap();

    assert_eq!(state.latest_log(), Some("Battle Start! Chess Club vs Circle drama"));
    assert!(state.opponent_deck().iter().all(|c| c.id.as_str().starts_with("drama-card-")));
    assert!(pool.roster("drama").is_err());
}
