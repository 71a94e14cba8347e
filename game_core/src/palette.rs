use serde::Serialize;

/// What a fill colour is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillRole {
    Background,
    Defender,
    Invader,
    DefenderBullet,
    InvaderBullet,
}

/// Fill colours handed to the canvas helper (CSS colour strings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: &'static str,
    pub defender: &'static str,
    pub invader: &'static str,
    pub defender_bullet: &'static str,
    pub invader_bullet: &'static str,
}

impl Palette {
    pub fn fill(&self, role: FillRole) -> &'static str {
        match role {
            FillRole::Background => self.background,
            FillRole::Defender => self.defender,
            FillRole::Invader => self.invader,
            FillRole::DefenderBullet => self.defender_bullet,
            FillRole::InvaderBullet => self.invader_bullet,
        }
    }
}

/// Invaderers colour scheme
pub const COLORS: Palette = Palette {
    background: "#000000",
    defender: "#33ff33",
    invader: "#ffffff",
    defender_bullet: "#33ff33",
    invader_bullet: "#ff3333",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_lookup() {
        assert_eq!(COLORS.fill(FillRole::Background), "#000000");
        assert_eq!(COLORS.fill(FillRole::Invader), COLORS.invader);
        assert_eq!(COLORS.fill(FillRole::InvaderBullet), "#ff3333");
    }
}
