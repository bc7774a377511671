//! Normalization of upstream hero entries.
//!
//! Upstream stats are loosely typed: numbers, numeric strings, `"null"`,
//! `"unknown"` or missing entirely. Each stat is coerced on its own and
//! anything uninterpretable becomes 0.

use herodex_types::{HeroStats, Stat};
use serde_json::Value;

/// Coerces one raw stat value to an integer, falling back to 0.
pub fn normalize_stat(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Bool(b)) => i64::from(*b),
        _ => 0,
    }
}

/// Builds [`HeroStats`] from an upstream entry if its name matches
/// `target` (already lowercased).
///
/// Stats are read from the entry's `powerstats` object. The returned name
/// is the entry's own spelling.
pub fn hero_from_entry(entry: &Value, target: &str) -> Option<HeroStats> {
    let name = entry.get("name")?.as_str()?;
    if name.to_lowercase() != target {
        return None;
    }

    let powerstats = entry.get("powerstats");
    let read = |stat: Stat| normalize_stat(powerstats.and_then(|p| p.get(stat.as_str())));

    Some(HeroStats {
        name: name.to_string(),
        intelligence: read(Stat::Intelligence),
        strength: read(Stat::Strength),
        speed: read(Stat::Speed),
        power: read(Stat::Power),
    })
}
