//! Entities living on the strip
//!
//! Entities are built from the strip they live on and remember its last
//! position; the strip itself is borrowed when they draw.

mod enemy;
mod player;

pub use enemy::Enemy;
pub use player::Player;

/// Movement direction of the player along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Towards the end of the strip
    #[default]
    Forward,
    /// Towards pixel 0
    Backward,
}

impl Direction {
    /// +1 or -1
    pub const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Side of the player an enemy spawned on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// At or before the player's position
    #[default]
    Left,
    /// Strictly after the player's position
    Right,
}

impl Side {
    /// +1 for [`Side::Right`], -1 for [`Side::Left`]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}
