//! Hero records and their power statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four numeric power statistics tracked per hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Intelligence,
    Strength,
    Speed,
    Power,
}

impl Stat {
    /// All stats, in the order filters are evaluated.
    pub const ALL: [Stat; 4] = [Stat::Intelligence, Stat::Strength, Stat::Speed, Stat::Power];

    /// The column name, JSON key and query parameter name for this stat.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stat::Intelligence => "intelligence",
            Stat::Strength => "strength",
            Stat::Speed => "speed",
            Stat::Power => "power",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stats for a single hero as resolved from the upstream source.
///
/// `name` is the upstream's canonical spelling, which may differ in case
/// from the name that was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStats {
    pub name: String,
    pub intelligence: i64,
    pub strength: i64,
    pub speed: i64,
    pub power: i64,
}

impl HeroStats {
    /// Returns the value of a single stat.
    #[must_use]
    pub fn get(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Intelligence => self.intelligence,
            Stat::Strength => self.strength,
            Stat::Speed => self.speed,
            Stat::Power => self.power,
        }
    }
}

/// A persisted hero.
///
/// The serialized form is the body returned by the `/hero/` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub intelligence: i64,
    pub strength: i64,
    pub speed: i64,
    pub power: i64,
}

impl Hero {
    /// Returns the value of a single stat.
    #[must_use]
    pub fn get(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Intelligence => self.intelligence,
            Stat::Strength => self.strength,
            Stat::Speed => self.speed,
            Stat::Power => self.power,
        }
    }

    /// Returns the stats portion of this record.
    #[must_use]
    pub fn stats(&self) -> HeroStats {
        HeroStats {
            name: self.name.clone(),
            intelligence: self.intelligence,
            strength: self.strength,
            speed: self.speed,
            power: self.power,
        }
    }
}
