//! Axis-aligned directions and quarter-turn rotations.

/// One of the four axis-aligned directions on a grid.
///
/// `Up` decreases `y`, `Down` increases it; `Left` decreases `x`,
/// `Right` increases it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards column 0.
    Left,
    /// Away from column 0.
    Right,
    /// Away from row 0.
    Down,
}

impl Direction {
    /// All four directions in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }

    /// Turn a quarter in the given rotation sense.
    pub const fn turn(self, rotation: Rotation) -> Self {
        match (rotation, self) {
            (Rotation::Clockwise, Self::Up) => Self::Right,
            (Rotation::Clockwise, Self::Right) => Self::Down,
            (Rotation::Clockwise, Self::Down) => Self::Left,
            (Rotation::Clockwise, Self::Left) => Self::Up,
            (Rotation::CounterClockwise, Self::Up) => Self::Left,
            (Rotation::CounterClockwise, Self::Left) => Self::Down,
            (Rotation::CounterClockwise, Self::Down) => Self::Right,
            (Rotation::CounterClockwise, Self::Right) => Self::Up,
        }
    }

    /// `true` for `Left` and `Right`.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// A quarter turn of a whole grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// 90 degrees clockwise.
    Clockwise,
    /// 90 degrees counter-clockwise.
    CounterClockwise,
}

impl Rotation {
    /// The rotation that undoes this one.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}
