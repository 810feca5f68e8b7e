//! Scenario system for unit and objective placement.
//!
//! Generates a fresh board for every match:
//! - Player units on column 0, Enemy units on the last column, rows sampled
//!   without replacement
//! - One Major objective near the board centre
//! - Minor objectives in a wider window around the centre
//!
//! No two objectives share a tile. Windows are clipped to the board.

use game_core::{
    Faction, GameError, GameState, InitializationError, Objective, ObjectiveKind, Position,
    RuleConfig,
};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::ScenarioConfig;
use crate::error::{Result, RuntimeError};

/// Builds a random starting board.
pub fn generate<R: Rng + ?Sized>(
    rules: &RuleConfig,
    config: &ScenarioConfig,
    rng: &mut R,
) -> Result<GameState> {
    let mut state = GameState::new(rules.grid_size).map_err(board_error)?;
    let last = rules.grid_size - 1;

    for (faction, column) in [(Faction::Player, 0), (Faction::Enemy, last)] {
        let rows: Vec<i32> = (0..rules.grid_size).collect();
        if rows.len() < config.units_per_faction {
            return Err(RuntimeError::InvalidConfig(format!(
                "cannot place {} units on {} rows",
                config.units_per_faction,
                rows.len()
            )));
        }
        for &row in rows.choose_multiple(rng, config.units_per_faction) {
            state
                .add_unit_with_health(faction, Position::new(column, row), rules.starting_health)
                .map_err(board_error)?;
        }
    }

    place_objective(&mut state, ObjectiveKind::Major, config.major_spread, rng)?;
    for _ in 0..config.minor_objectives {
        place_objective(&mut state, ObjectiveKind::Minor, config.minor_spread, rng)?;
    }

    tracing::info!(
        "Generated scenario: {} units, {} objectives on {}x{}",
        state.units().len(),
        state.objectives().len(),
        rules.grid_size,
        rules.grid_size
    );

    Ok(state)
}

fn board_error(err: InitializationError) -> RuntimeError {
    tracing::error!(
        "Board construction failed [{} {}]: {}",
        err.severity().as_str(),
        err.error_code(),
        err
    );
    RuntimeError::InitialState(err)
}

fn place_objective<R: Rng + ?Sized>(
    state: &mut GameState,
    kind: ObjectiveKind,
    spread: i32,
    rng: &mut R,
) -> Result<()> {
    let centre = state.grid_size() / 2;
    let low = (centre - spread).max(0);
    let high = (centre + spread).min(state.grid_size() - 1);

    let free: Vec<Position> = (low..=high)
        .flat_map(|x| (low..=high).map(move |y| Position::new(x, y)))
        .filter(|&position| !state.has_objective_at(position))
        .collect();

    let &position = free.choose(rng).ok_or_else(|| {
        RuntimeError::InvalidConfig(format!(
            "no free tile left for a {} objective within {} of the centre",
            kind, spread
        ))
    })?;

    state
        .add_objective(Objective::new(position, kind))
        .map_err(board_error)
}
