use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("unexpected response shape: {0}")]
    Malformed(String),
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    types: Vec<RawTypeSlot>,
    height: i64,
    weight: i64,
    stats: Vec<RawStat>,
}

#[derive(Debug, Deserialize)]
struct RawTypeSlot {
    #[serde(rename = "type")]
    kind: RawNamed,
}

#[derive(Debug, Deserialize)]
struct RawStat {
    base_stat: i64,
    stat: RawNamed,
}

#[derive(Debug, Deserialize)]
struct RawNamed {
    name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseStats {
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub special_attack: i64,
    pub special_defense: i64,
    pub speed: i64,
}

impl BaseStats {
    /// Assign a stat by its PokeAPI name. Unknown names are ignored.
    fn set(&mut self, name: &str, value: i64) {
        match name {
            "hp" => self.hp = value,
            "attack" => self.attack = value,
            "defense" => self.defense = value,
            "special-attack" => self.special_attack = value,
            "special-defense" => self.special_defense = value,
            "speed" => self.speed = value,
            _ => {}
        }
    }
}

/// The fields the viewer shows, pulled out of a raw creature record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatureInfo {
    pub types: Vec<String>,
    /// Decimetres
    pub height_dm: i64,
    /// Hectograms
    pub weight_hg: i64,
    pub stats: BaseStats,
}

impl CreatureInfo {
    /// Read `types[].type.name`, `height`, `weight` and `stats[]`.
    ///
    /// Stats absent from the record stay at 0. Other fields the record
    /// carries are ignored.
    pub fn from_record(record: &Value) -> Result<Self, ExtractError> {
        let raw = RawRecord::deserialize(record).map_err(|e| ExtractError::Malformed(e.to_string()))?;

        let mut stats = BaseStats::default();
        for entry in &raw.stats {
            stats.set(&entry.stat.name, entry.base_stat);
        }

        Ok(Self {
            types: raw.types.into_iter().map(|t| t.kind.name).collect(),
            height_dm: raw.height,
            weight_hg: raw.weight,
            stats,
        })
    }

    pub fn height_m(&self) -> f64 {
        self.height_dm as f64 / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_hg as f64 / 10.0
    }

    pub fn types_text(&self) -> String {
        format!("Types: {}", self.types.join(", "))
    }

    pub fn height_text(&self) -> String {
        format!("Height: {} m", format_decimal(self.height_m()))
    }

    pub fn weight_text(&self) -> String {
        format!("Weight: {} kg", format_decimal(self.weight_kg()))
    }
}

/// Shortest float representation, always with a fractional part (`2.0`, `1.7`).
pub fn format_decimal(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rockruff() -> Value {
        json!({
            "name": "rockruff",
            "height": 5,
            "weight": 92,
            "types": [{"slot": 1, "type": {"name": "rock", "url": ""}}],
            "stats": [
                {"base_stat": 45, "stat": {"name": "hp"}},
                {"base_stat": 65, "stat": {"name": "attack"}},
                {"base_stat": 40, "stat": {"name": "defense"}},
                {"base_stat": 30, "stat": {"name": "special-attack"}},
                {"base_stat": 40, "stat": {"name": "special-defense"}},
                {"base_stat": 60, "stat": {"name": "speed"}}
            ]
        })
    }

    #[test]
    fn test_from_record() {
        let info = CreatureInfo::from_record(&rockruff()).expect("extract");
        assert_eq!(info.types, vec!["rock"]);
        assert_eq!(info.stats.hp, 45);
        assert_eq!(info.stats.special_attack, 30);
        assert_eq!(info.stats.special_defense, 40);
        assert_eq!(info.stats.speed, 60);
        assert_eq!(info.weight_text(), "Weight: 9.2 kg");
        assert_eq!(info.height_text(), "Height: 0.5 m");
    }

    #[test]
    fn test_unit_conversion() {
        let record = json!({"height": 17, "weight": 92, "types": [], "stats": []});
        let info = CreatureInfo::from_record(&record).expect("extract");
        assert_eq!(info.height_text(), "Height: 1.7 m");
        assert_eq!(info.weight_text(), "Weight: 9.2 kg");

        let record = json!({"height": 20, "weight": 1000, "types": [], "stats": []});
        let info = CreatureInfo::from_record(&record).expect("extract");
        assert_eq!(info.height_text(), "Height: 2.0 m");
        assert_eq!(info.weight_text(), "Weight: 100.0 kg");
    }

    #[test]
    fn missing_stats_default_to_zero() {
        let record = json!({
            "height": 1, "weight": 1, "types": [],
            "stats": [
                {"base_stat": 55, "stat": {"name": "hp"}},
                {"base_stat": 99, "stat": {"name": "accuracy"}}
            ]
        });
        let info = CreatureInfo::from_record(&record).expect("extract");
        assert_eq!(info.stats.hp, 55);
        assert_eq!(info.stats.speed, 0);
        assert_eq!(info.stats.attack, 0);
    }

    #[test]
    fn multiple_types_keep_order() {
        let record = json!({
            "height": 1, "weight": 1, "stats": [],
            "types": [{"type": {"name": "grass"}}, {"type": {"name": "poison"}}]
        });
        let info = CreatureInfo::from_record(&record).expect("extract");
        assert_eq!(info.types_text(), "Types: grass, poison");
    }

    #[test]
    fn missing_field_is_reported() {
        let mut record = rockruff();
        record.as_object_mut().expect("object").remove("height");
        let Err(ExtractError::Malformed(msg)) = CreatureInfo::from_record(&record) else {
            panic!("expected extraction to fail");
        };
        assert!(msg.contains("height"), "{}", msg);

        let record = json!({"height": 1, "weight": 1, "types": [{"slot": 1}], "stats": []});
        let Err(ExtractError::Malformed(msg)) = CreatureInfo::from_record(&record) else {
            panic!("expected extraction to fail");
        };
        assert!(msg.contains("type"), "{}", msg);
    }
}
