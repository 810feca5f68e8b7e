use game_core::{
    Action, Faction, GameState, KnockState, Objective, Position, Resolution, RuleConfig,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use runtime::{DecisionSource, Heuristic, QStore, TurnConfig, TurnOrchestrator};

fn orchestrator(grid_size: i32) -> TurnOrchestrator {
    TurnOrchestrator::new(
        RuleConfig::default().with_grid_size(grid_size),
        TurnConfig::default(),
    )
}

#[test]
fn boxed_in_unit_gets_stay_penalty_and_blanket_update() {
    let mut state = GameState::new(1).unwrap();
    let id = state.add_unit(Faction::Player, Position::ORIGIN).unwrap();
    let board = state.clone();
    let mut store = QStore::default();
    let mut rng = StdRng::seed_from_u64(0);

    let report =
        orchestrator(1).run_faction_turn(&mut state, Faction::Player, &mut store, 0.0, &mut rng);

    assert_eq!(report.units.len(), 1);
    let unit = report.units[0];
    assert_eq!(unit.unit, id);
    assert_eq!(unit.source, DecisionSource::Stay);
    assert_eq!(unit.action, Action::new(0, 0));
    // Corner -5, stayed -1.
    assert_eq!(unit.reward, -6.0);
    assert!(report.blanket_penalty);
    assert!(!report.all_moved());
    assert!(report.forced.is_empty());
    assert_eq!(report.updates, 2);

    // Act update: 0.1 * -6 = -0.6.
    // Blanket update: -0.6 + 0.1 * (-5 + 0.95 * -0.6 + 0.6) = -1.097.
    let value = store.value_of(&board, Action::new(0, 0));
    assert!((value - -1.097).abs() < 1e-9, "got {value}");
}

#[test]
fn every_boxed_in_unit_is_penalised() {
    let mut state = GameState::new(2).unwrap();
    for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        state.add_unit(Faction::Enemy, Position::new(x, y)).unwrap();
    }
    let board = state.clone();
    let mut store = QStore::default();
    let mut rng = StdRng::seed_from_u64(0);

    let report =
        orchestrator(2).run_faction_turn(&mut state, Faction::Enemy, &mut store, 0.5, &mut rng);

    assert_eq!(report.units.len(), 4);
    for unit in &report.units {
        assert_eq!(unit.source, DecisionSource::Stay);
        assert_eq!(unit.reward, -6.0);
    }
    assert!(report.blanket_penalty);
    // Four act updates plus four blanket updates; no objectives to cover.
    assert_eq!(report.updates, 8);

    let row = store.table().get(&store.key(&board)).unwrap();
    assert_eq!(row.len(), 4);
    assert!(row.values().all(|value| *value < 0.0));
    // Nothing moved.
    assert_eq!(
        state.units().iter().map(|u| u.position).collect::<Vec<_>>(),
        board.units().iter().map(|u| u.position).collect::<Vec<_>>()
    );
}

#[test]
fn too_few_holders_forces_reassignment_of_first_units() {
    let mut state = GameState::new(20).unwrap();
    let a = state.add_unit(Faction::Player, Position::new(9, 10)).unwrap();
    let b = state.add_unit(Faction::Player, Position::new(15, 15)).unwrap();
    let c = state.add_unit(Faction::Player, Position::new(15, 4)).unwrap();
    state.add_objective(Objective::major(10, 10)).unwrap();
    state.add_objective(Objective::minor(3, 3)).unwrap();
    let turn_start = state.clone();
    let mut store = QStore::default();
    let mut rng = StdRng::seed_from_u64(11);

    let report =
        orchestrator(20).run_faction_turn(&mut state, Faction::Player, &mut store, 0.0, &mut rng);

    // `a` steps onto the Major objective; nobody else reaches one.
    assert_eq!(
        report.units[0].source,
        DecisionSource::Heuristic(Heuristic::ObjectiveSeek)
    );
    assert_eq!(report.objective_holders, 1);

    // The first two units in collection order are reassigned, holder included,
    // towards the first free objective. Both are too far to get there.
    assert_eq!(report.forced, vec![a, b]);
    assert!(!report.forced.contains(&c));
    assert_eq!(state.unit(a).unwrap().position, Position::new(10, 10));

    // Forced updates are keyed on the turn-start board and carry no stay
    // penalty. Every later board still has an all-zero row, so:
    // `a` (on the Major objective, reward 3): 0.1 * 3 = 0.3
    // `b` (reward 0): 0.3 + 0.1 * (0 - 0.3) = 0.27
    let row = store.table().get(&store.key(&turn_start)).unwrap();
    let forced = row[&Action::new(3, 3)];
    assert!((forced - 0.27).abs() < 1e-9, "got {forced}");
    // `a`'s own step onto the Major objective.
    let seek = row[&Action::new(10, 10)];
    assert!((seek - 0.3).abs() < 1e-9, "got {seek}");
    assert_eq!(report.updates, 3 + 2);
}

#[test]
fn forced_move_reaches_an_adjacent_objective() {
    let mut state = GameState::new(20).unwrap();
    let id = state.add_unit(Faction::Player, Position::new(0, 10)).unwrap();
    state.add_objective(Objective::minor(1, 11)).unwrap();
    state.add_objective(Objective::minor(2, 12)).unwrap();
    let turn_start = state.clone();
    let mut store = QStore::default();
    let mut rng = StdRng::seed_from_u64(4);

    let report =
        orchestrator(20).run_faction_turn(&mut state, Faction::Player, &mut store, 0.0, &mut rng);

    // Only (1, 11) is in reach, so the unit seeks it and is the lone holder.
    assert_eq!(report.units[0].action, Action::new(1, 11));
    assert_eq!(report.objective_holders, 1);

    // It is then pushed on to the next free objective, one step away.
    assert_eq!(report.forced, vec![id]);
    assert_eq!(state.unit(id).unwrap().position, Position::new(2, 12));
    assert!(!report.blanket_penalty);
    assert_eq!(report.updates, 2);

    // Both updates start from the turn-start board: Minor reward 1 each.
    let row = store.table().get(&store.key(&turn_start)).unwrap();
    assert!((row[&Action::new(1, 11)] - 0.1).abs() < 1e-9);
    assert!((row[&Action::new(2, 12)] - 0.1).abs() < 1e-9);
}

#[test]
fn empty_board_turn_is_a_no_op() {
    let mut state = GameState::new(20).unwrap();
    let mut store = QStore::default();
    let mut rng = StdRng::seed_from_u64(1);

    let report =
        orchestrator(20).run_faction_turn(&mut state, Faction::Enemy, &mut store, 0.5, &mut rng);

    assert!(report.units.is_empty());
    assert_eq!(report.updates, 0);
    assert!(report.forced.is_empty());
    assert!(!report.blanket_penalty);
    assert!(store.table().is_empty());
}

#[test]
fn faction_without_units_leaves_board_and_table_alone() {
    let mut state = GameState::new(20).unwrap();
    state.add_unit(Faction::Player, Position::new(3, 3)).unwrap();
    state.add_unit(Faction::Player, Position::new(8, 2)).unwrap();
    state.add_objective(Objective::major(10, 10)).unwrap();
    let board = state.clone();
    let mut store = QStore::default();
    let mut rng = StdRng::seed_from_u64(1);

    let report =
        orchestrator(20).run_faction_turn(&mut state, Faction::Enemy, &mut store, 0.5, &mut rng);

    assert!(report.units.is_empty());
    assert_eq!(report.objective_holders, 0);
    assert_eq!(report.updates, 0);
    assert!(report.forced.is_empty());
    assert!(!report.blanket_penalty);
    assert!(store.table().is_empty());
    assert_eq!(state, board);
}

#[test]
fn enough_holders_means_no_reassignment() {
    let mut state = GameState::new(20).unwrap();
    state.add_unit(Faction::Enemy, Position::new(9, 10)).unwrap();
    state.add_unit(Faction::Enemy, Position::new(4, 4)).unwrap();
    state.add_objective(Objective::major(10, 10)).unwrap();
    state.add_objective(Objective::minor(3, 3)).unwrap();
    let mut store = QStore::default();
    let mut rng = StdRng::seed_from_u64(5);

    let report =
        orchestrator(20).run_faction_turn(&mut state, Faction::Enemy, &mut store, 0.0, &mut rng);

    assert_eq!(report.objective_holders, 2);
    assert!(report.forced.is_empty());
    assert!(!report.blanket_penalty);
    assert!(report.units.iter().all(|u| u.reward > 0.0));
}

#[test]
fn attacker_holding_ground_is_a_stay() {
    let mut state = GameState::new(20).unwrap();
    let player = state.add_unit(Faction::Player, Position::new(5, 5)).unwrap();
    state.unit_mut(player).unwrap().knock = KnockState::Knocked;
    state.unit_mut(player).unwrap().health = 1;
    let enemy = state.add_unit(Faction::Enemy, Position::new(4, 5)).unwrap();
    let mut store = QStore::default();
    let mut rng = StdRng::seed_from_u64(2);

    let report =
        orchestrator(20).run_faction_turn(&mut state, Faction::Enemy, &mut store, 0.0, &mut rng);

    let unit = report.units[0];
    assert_eq!(unit.unit, enemy);
    assert!(matches!(unit.resolution, Resolution::Attacked { defender, .. } if defender == player));
    assert_eq!(report.eliminated, vec![player]);
    assert!(state.unit(player).is_none());
    // No opponent left nearby, and the attacker did not change tile.
    assert_eq!(unit.reward, -1.0);
    assert!(report.blanket_penalty);
}

#[test]
fn only_the_acting_faction_moves() {
    let mut state = GameState::new(20).unwrap();
    state.add_unit(Faction::Player, Position::new(2, 2)).unwrap();
    state.add_unit(Faction::Enemy, Position::new(17, 17)).unwrap();
    let enemy_before = state.units_of(Faction::Enemy).next().cloned().unwrap();
    let mut store = QStore::default();
    let mut rng = StdRng::seed_from_u64(9);

    orchestrator(20).run_faction_turn(&mut state, Faction::Player, &mut store, 0.3, &mut rng);

    assert_eq!(state.units_of(Faction::Enemy).next(), Some(&enemy_before));
    assert!(state.units_of(Faction::Player).all(|u| u.moved));
}
