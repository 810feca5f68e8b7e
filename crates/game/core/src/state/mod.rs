//! Authoritative board state.
//!
//! [`GameState`] is the snapshot exchanged with everything outside the rules:
//! an insertion-ordered unit collection plus an insertion-ordered objective
//! collection on a square grid. Collection order is meaningful (it drives turn
//! order and the encoded [`StateKey`]), so units are removed in place and never
//! reordered.
pub mod error;
pub mod key;
pub mod types;

pub use error::InitializationError;
pub use key::{KeyOrdering, StateKey};
pub use types::{Faction, KnockState, Objective, ObjectiveKind, Position, UnitId, UnitState};

/// Canonical snapshot of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    grid_size: i32,

    /// Sequential unit id allocator (monotonically increasing, never reused).
    next_unit_id: u32,

    units: Vec<UnitState>,
    objectives: Vec<Objective>,
}

impl GameState {
    /// Creates an empty board of `grid_size` × `grid_size` tiles.
    pub fn new(grid_size: i32) -> Result<Self, InitializationError> {
        if grid_size <= 0 {
            return Err(InitializationError::InvalidGridSize { grid_size });
        }
        Ok(Self {
            grid_size,
            next_unit_id: 0,
            units: Vec::new(),
            objectives: Vec::new(),
        })
    }

    /// Appends a full-health unit and returns its id.
    pub fn add_unit(
        &mut self,
        faction: Faction,
        position: Position,
    ) -> Result<UnitId, InitializationError> {
        self.add_unit_with_health(faction, position, UnitState::MAX_HEALTH)
    }

    /// Appends a unit with explicit health (1..=MAX_HEALTH).
    pub fn add_unit_with_health(
        &mut self,
        faction: Faction,
        position: Position,
        health: u8,
    ) -> Result<UnitId, InitializationError> {
        if !self.in_bounds(position) {
            return Err(InitializationError::UnitOutOfBounds {
                position,
                grid_size: self.grid_size,
            });
        }
        if health == 0 || health > UnitState::MAX_HEALTH {
            return Err(InitializationError::InvalidHealth { health });
        }

        let id = self.allocate_unit_id()?;
        self.units
            .push(UnitState::new(id, position, faction).with_health(health));
        Ok(id)
    }

    /// Appends an objective. Several objectives may share a tile.
    pub fn add_objective(&mut self, objective: Objective) -> Result<(), InitializationError> {
        if !self.in_bounds(objective.position) {
            return Err(InitializationError::ObjectiveOutOfBounds {
                position: objective.position,
                grid_size: self.grid_size,
            });
        }
        self.objectives.push(objective);
        Ok(())
    }

    fn allocate_unit_id(&mut self) -> Result<UnitId, InitializationError> {
        let id = UnitId(self.next_unit_id);
        self.next_unit_id =
            self.next_unit_id
                .checked_add(1)
                .ok_or(InitializationError::UnitIdOverflow {
                    current: self.next_unit_id,
                })?;
        Ok(id)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    #[inline]
    pub fn in_bounds(&self, position: Position) -> bool {
        position.in_bounds(self.grid_size)
    }

    pub fn units(&self) -> &[UnitState] {
        &self.units
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    pub fn unit(&self, id: UnitId) -> Option<&UnitState> {
        self.units.iter().find(|unit| unit.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut UnitState> {
        self.units.iter_mut().find(|unit| unit.id == id)
    }

    /// Living units of one faction, in collection order.
    pub fn units_of(&self, faction: Faction) -> impl Iterator<Item = &UnitState> {
        self.units.iter().filter(move |unit| unit.faction == faction)
    }

    /// Ids of one faction's units, in collection order.
    pub fn unit_ids_of(&self, faction: Faction) -> Vec<UnitId> {
        self.units_of(faction).map(|unit| unit.id).collect()
    }

    pub fn count(&self, faction: Faction) -> usize {
        self.units_of(faction).count()
    }

    /// True if any unit of any faction stands on `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.units.iter().any(|unit| unit.position == position)
    }

    /// True if a unit of `faction` stands on `position`.
    pub fn is_held_by(&self, position: Position, faction: Faction) -> bool {
        self.units
            .iter()
            .any(|unit| unit.position == position && unit.faction == faction)
    }

    /// First unit (collection order) on `position` that opposes `faction`.
    pub fn opponent_at(&self, position: Position, faction: Faction) -> Option<&UnitState> {
        self.units
            .iter()
            .find(|unit| unit.position == position && unit.is_opponent_of(faction))
    }

    /// Objectives on `position`, in objective-list order.
    pub fn objectives_at(&self, position: Position) -> impl Iterator<Item = &Objective> {
        self.objectives
            .iter()
            .filter(move |objective| objective.position == position)
    }

    pub fn has_objective_at(&self, position: Position) -> bool {
        self.objectives_at(position).next().is_some()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Removes a unit in place, preserving the order of the others.
    pub fn remove_unit(&mut self, id: UnitId) -> Option<UnitState> {
        let index = self.units.iter().position(|unit| unit.id == id)?;
        Some(self.units.remove(index))
    }

    /// Clears `moved` and knock state on every unit.
    pub fn reset_turn_flags(&mut self) {
        for unit in &mut self.units {
            unit.reset_turn_flags();
        }
    }
}
