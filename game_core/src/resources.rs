/// Ships destroyed since the last reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub ships_destroyed: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.ships_destroyed += 1;
    }

    pub fn reset(&mut self) {
        self.ships_destroyed = 0;
    }
}

/// Defender shots left in the current frame
#[derive(Debug, Clone, Copy, Default)]
pub struct ShotBudget {
    pub per_frame: u32,
    pub left: u32,
}

impl ShotBudget {
    pub fn new(per_frame: u32) -> Self {
        Self {
            per_frame,
            left: per_frame,
        }
    }

    /// Refill at the start of a frame
    pub fn refill(&mut self) {
        self.left = self.per_frame;
    }

    /// Spend one shot if any are left
    pub fn try_spend(&mut self) -> bool {
        if self.left > 0 {
            self.left -= 1;
            true
        } else {
            false
        }
    }
}
