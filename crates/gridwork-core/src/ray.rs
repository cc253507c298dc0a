//! The [`Ray`] traversal state.

use crate::direction::Direction;
use crate::position::Position;

/// A position paired with a heading.
///
/// Ray traversals use this as their visited-set key: two rays are the same
/// state only when both the cell and the heading match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ray {
    /// Cell the ray currently occupies.
    pub position: Position,
    /// Heading the ray travels in.
    pub direction: Direction,
}

impl Ray {
    /// Create a ray.
    pub const fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// The ray one cell further along its heading.
    pub const fn advance(self) -> Self {
        Self::new(self.position.step(self.direction), self.direction)
    }

    /// Same cell, new heading.
    pub const fn redirect(self, direction: Direction) -> Self {
        Self::new(self.position, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn advance_moves_along_heading() {
        let ray = Ray::new(Position::new(-1, 0), Direction::Right);
        assert_eq!(ray.advance(), Ray::new(Position::new(0, 0), Direction::Right));
    }

    #[test]
    fn hashing_distinguishes_heading() {
        let p = Position::new(2, 2);
        let mut seen = HashSet::new();
        assert!(seen.insert(Ray::new(p, Direction::Up)));
        assert!(seen.insert(Ray::new(p, Direction::Down)));
        assert!(!seen.insert(Ray::new(p, Direction::Up)));
    }
}
