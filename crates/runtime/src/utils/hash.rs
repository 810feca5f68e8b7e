//! Hashing utilities for state keys.
//!
//! Provides deterministic digests for logging and debugging purposes.

use game_core::{Faction, ObjectiveKind, StateKey};
use sha2::{Digest, Sha256};

/// Compute a compact digest of a state key.
///
/// Returns the first 8 bytes of the SHA-256 hash as a hex string.
pub fn key_digest(key: &StateKey) -> String {
    let mut hasher = Sha256::new();

    hasher.update((key.units.len() as u64).to_le_bytes());
    for &(x, y, faction) in &key.units {
        hasher.update(x.to_le_bytes());
        hasher.update(y.to_le_bytes());
        hasher.update([faction_tag(faction)]);
    }

    hasher.update((key.objectives.len() as u64).to_le_bytes());
    for &(x, y, kind) in &key.objectives {
        hasher.update(x.to_le_bytes());
        hasher.update(y.to_le_bytes());
        hasher.update([objective_tag(kind)]);
    }

    let hash = hasher.finalize();
    hex::encode(&hash[..8])
}

fn faction_tag(faction: Faction) -> u8 {
    match faction {
        Faction::Player => 0,
        Faction::Enemy => 1,
    }
}

fn objective_tag(kind: ObjectiveKind) -> u8 {
    match kind {
        ObjectiveKind::Major => 0,
        ObjectiveKind::Minor => 1,
    }
}
