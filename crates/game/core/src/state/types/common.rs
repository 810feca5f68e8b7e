use std::fmt;

/// Stable identifier of a unit for the lifetime of a match.
///
/// Identifiers are allocated sequentially and never reused, so a removed unit
/// can be detected by a failed lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by the given offset.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Displacement from `self` to `other`.
    #[inline]
    pub const fn delta_to(self, other: Position) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }

    /// Chebyshev (king-move) distance; diagonal neighbours are at distance 1.
    #[inline]
    pub fn chebyshev(self, other: Position) -> u32 {
        let (dx, dy) = self.delta_to(other);
        dx.unsigned_abs().max(dy.unsigned_abs())
    }

    /// True if the position lies inside a `grid_size` × `grid_size` board.
    #[inline]
    pub const fn in_bounds(self, grid_size: i32) -> bool {
        self.x >= 0 && self.x < grid_size && self.y >= 0 && self.y < grid_size
    }

    /// True if the position is one of the four board corners.
    pub const fn is_corner(self, grid_size: i32) -> bool {
        let last = grid_size - 1;
        (self.x == 0 || self.x == last) && (self.y == 0 || self.y == last)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_counts_diagonals_as_one() {
        let origin = Position::new(5, 5);
        assert_eq!(origin.chebyshev(Position::new(6, 6)), 1);
        assert_eq!(origin.chebyshev(Position::new(4, 6)), 1);
        assert_eq!(origin.chebyshev(Position::new(7, 6)), 2);
        assert_eq!(origin.chebyshev(origin), 0);
    }

    #[test]
    fn corners_of_a_twenty_board() {
        for corner in [(0, 0), (0, 19), (19, 0), (19, 19)] {
            assert!(Position::new(corner.0, corner.1).is_corner(20));
        }
        assert!(!Position::new(0, 5).is_corner(20));
        assert!(!Position::new(19, 18).is_corner(20));
    }

    #[test]
    fn bounds_are_half_open() {
        assert!(Position::new(0, 0).in_bounds(3));
        assert!(Position::new(2, 2).in_bounds(3));
        assert!(!Position::new(3, 0).in_bounds(3));
        assert!(!Position::new(-1, 1).in_bounds(3));
    }
}
