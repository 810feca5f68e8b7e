use game_core::{Faction, GameState, KnockState, Position, VictoryReason};
use rand::SeedableRng;
use rand::rngs::StdRng;
use runtime::{
    InMemoryTableRepo, MatchEnd, MatchRunner, QStore, RuntimeConfig, TableRepository, Trainer,
    scenario,
};

#[test]
fn match_runs_to_a_consistent_end() {
    let config = RuntimeConfig::default();
    let mut rng = StdRng::seed_from_u64(17);
    let mut store = QStore::new(config.learning);
    let state = scenario::generate(&config.rules, &config.scenario, &mut rng).unwrap();

    let runner = MatchRunner::builder()
        .config(&config)
        .max_turns(Some(300))
        .build();
    let outcome = runner.run(state, &mut store, 0.1, &mut rng);

    assert!(outcome.turns <= 300);
    match outcome.end {
        MatchEnd::Victory(VictoryReason::ScoreReached) => {
            let winner = outcome.winner.unwrap();
            assert!(outcome.scores.of(winner) >= 500);
        }
        MatchEnd::Victory(VictoryReason::Annihilation) => {
            let winner = outcome.winner.unwrap();
            assert_eq!(outcome.final_state.count(winner.opponent()), 0);
        }
        MatchEnd::TurnLimit => {
            assert_eq!(outcome.turns, 300);
            assert!(outcome.winner.is_none());
        }
    }
    assert_eq!(outcome.survivors.player, outcome.final_state.count(Faction::Player));
    assert_eq!(outcome.survivors.enemy, outcome.final_state.count(Faction::Enemy));
}

#[test]
fn flags_are_cleared_after_every_faction_turn() {
    let config = RuntimeConfig::default();
    let mut rng = StdRng::seed_from_u64(23);
    let mut store = QStore::new(config.learning);
    let state = scenario::generate(&config.rules, &config.scenario, &mut rng).unwrap();

    let mut turns_seen = 0;
    let outcome = MatchRunner::builder()
        .config(&config)
        .max_turns(Some(20))
        .build()
        .run_with(state, &mut store, 0.2, &mut rng, |_, _, _| turns_seen += 1);

    assert_eq!(turns_seen, outcome.turns);
    for unit in outcome.final_state.units() {
        assert!(!unit.moved);
        assert_eq!(unit.knock, KnockState::Fresh);
    }
}

#[test]
fn factions_alternate_starting_with_player() {
    let config = RuntimeConfig::default();
    let mut rng = StdRng::seed_from_u64(29);
    let mut store = QStore::new(config.learning);
    let state = scenario::generate(&config.rules, &config.scenario, &mut rng).unwrap();

    let mut order = Vec::new();
    MatchRunner::builder()
        .config(&config)
        .max_turns(Some(6))
        .build()
        .run_with(state, &mut store, 0.0, &mut rng, |faction, _, _| {
            order.push(faction)
        });

    assert_eq!(
        order,
        vec![
            Faction::Player,
            Faction::Enemy,
            Faction::Player,
            Faction::Enemy,
            Faction::Player,
            Faction::Enemy
        ]
    );
}

#[test]
fn empty_side_loses_after_first_turn() {
    let mut state = GameState::new(20).unwrap();
    state.add_unit(Faction::Player, Position::new(0, 3)).unwrap();
    let mut store = QStore::default();
    let mut rng = StdRng::seed_from_u64(0);

    let outcome = MatchRunner::builder()
        .build()
        .run(state, &mut store, 0.0, &mut rng);

    assert_eq!(outcome.winner, Some(Faction::Player));
    assert_eq!(outcome.end, MatchEnd::Victory(VictoryReason::Annihilation));
    assert_eq!(outcome.turns, 1);
}

#[test]
fn zero_turn_limit_is_an_immediate_draw() {
    let config = RuntimeConfig::default();
    let mut rng = StdRng::seed_from_u64(31);
    let state = scenario::generate(&config.rules, &config.scenario, &mut rng).unwrap();
    let mut store = QStore::default();

    let outcome = MatchRunner::builder()
        .max_turns(Some(0))
        .build()
        .run(state.clone(), &mut store, 0.0, &mut rng);

    assert_eq!(outcome.end, MatchEnd::TurnLimit);
    assert_eq!(outcome.turns, 0);
    assert_eq!(outcome.final_state, state);
    assert!(store.table().is_empty());
}

#[test]
fn trainer_decays_exploration_and_saves() {
    let mut config = RuntimeConfig::default();
    config.trainer.episodes = 3;
    config.trainer.max_turns = Some(10);
    let repo = InMemoryTableRepo::new();
    let mut store = QStore::new(config.learning);
    let mut rng = StdRng::seed_from_u64(37);

    let summary = Trainer::new(config)
        .train(&mut store, &repo, &mut rng)
        .unwrap();

    let epsilons: Vec<f64> = summary.episodes.iter().map(|e| e.epsilon).collect();
    assert_eq!(epsilons.len(), 3);
    assert_eq!(epsilons[0], 1.0);
    assert!((epsilons[1] - 0.1).abs() < 1e-12);
    assert!((epsilons[2] - 0.01).abs() < 1e-12);

    assert_eq!(
        summary.wins(Faction::Player) + summary.wins(Faction::Enemy) + summary.draws(),
        3
    );
    assert!(repo.exists());
    assert_eq!(repo.load().unwrap().unwrap().len(), summary.states);
    assert_eq!(summary.states, store.table().len());
}
