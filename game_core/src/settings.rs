use serde::{Deserialize, Serialize};

use crate::canvas::AttributeSource;
use crate::number::to_number;
use crate::params::Params;

/// Canvas attribute names read by [`GameSettings::from_attributes`]
pub mod attr {
    pub const SHIP_OFFSET: &str = "shipOffset";
    pub const SHIP_COLUMNS: &str = "shipColumns";
    pub const SHIP_ROWS: &str = "shipRows";
    pub const SHIP_SIZE: &str = "shipSize";
    pub const DEFENDER_BULLET_LENGTH: &str = "defenderBulletLength";
    pub const SHOTS_PER_FRAME: &str = "shotsPerFrame";
}

/// Per-game settings taken from the canvas element.
///
/// Values are kept exactly as parsed: there is no validation or defaulting,
/// and a missing or malformed attribute shows up as NaN. The `formation_*`
/// and `shot_budget` helpers turn them into counts for the battle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    #[serde(with = "nan_as_null")]
    pub ship_rows: f64,
    #[serde(with = "nan_as_null")]
    pub ship_columns: f64,
    #[serde(with = "nan_as_null")]
    pub total_ships: f64, // ship_rows * ship_columns
    #[serde(with = "nan_as_null")]
    pub ship_size: f64,
    #[serde(with = "nan_as_null")]
    pub ship_offset: f64,
    #[serde(with = "nan_as_null")]
    pub ship_jump: f64, // ship_offset + ship_rows
    #[serde(with = "nan_as_null")]
    pub defender_bullet_length: f64,
    #[serde(with = "nan_as_null")]
    pub shots_per_frame: f64,
}

impl GameSettings {
    /// Read every setting from the element's attributes. Never fails.
    pub fn from_attributes<A: AttributeSource + ?Sized>(source: &A) -> Self {
        let read = |name: &str| to_number(source.get_attribute(name).as_deref());

        let ship_offset = read(attr::SHIP_OFFSET);
        let ship_columns = read(attr::SHIP_COLUMNS);
        let ship_rows = read(attr::SHIP_ROWS);

        Self {
            ship_rows,
            ship_columns,
            total_ships: ship_rows * ship_columns,
            ship_size: read(attr::SHIP_SIZE),
            ship_offset,
            ship_jump: ship_offset + ship_rows,
            defender_bullet_length: read(attr::DEFENDER_BULLET_LENGTH),
            shots_per_frame: read(attr::SHOTS_PER_FRAME),
        }
    }

    /// Names of settings that came out as NaN
    pub fn nan_fields(&self) -> Vec<&'static str> {
        [
            ("shipRows", self.ship_rows),
            ("shipColumns", self.ship_columns),
            ("shipSize", self.ship_size),
            ("shipOffset", self.ship_offset),
            ("defenderBulletLength", self.defender_bullet_length),
            ("shotsPerFrame", self.shots_per_frame),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_nan())
        .map(|(name, _)| name)
        .collect()
    }

    /// Number of invader rows to spawn (NaN and negatives count as zero)
    pub fn formation_rows(&self) -> usize {
        capped_count("shipRows", self.ship_rows, Params::MAX_FORMATION_ROWS)
    }

    /// Number of invader columns to spawn (NaN and negatives count as zero)
    pub fn formation_columns(&self) -> usize {
        capped_count("shipColumns", self.ship_columns, Params::MAX_FORMATION_COLUMNS)
    }

    /// Defender shots allowed per frame
    pub fn shot_budget(&self) -> u32 {
        self.shots_per_frame as u32
    }
}

fn capped_count(name: &str, value: f64, max: usize) -> usize {
    let count = value as usize;
    if count > max {
        log::warn!("{} = {} exceeds the formation limit, using {}", name, value, max);
        max
    } else {
        count
    }
}

/// NaN has no JSON form; it is written as `null` and read back as NaN.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
