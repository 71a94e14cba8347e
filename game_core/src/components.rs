use glam::Vec2;

/// An invader in the formation grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invader {
    pub row: usize,
    pub column: usize,
}

impl Invader {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// The player's ship
#[derive(Debug, Clone, Copy, Default)]
pub struct Defender;

/// A shot fired upward by the defender
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefenderBullet {
    pub length: f32,
}

/// Top-left corner in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);
