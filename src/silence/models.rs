use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A silence record as exported by the alert-manager backend.
///
/// `param_set` maps rule keys to the string values they match, in the
/// order the backend emitted them. Keys starting with `__` are backend
/// metadata and never shown to users.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Silence {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user: String,
    pub active: bool,
    /// Creation instant, seconds since the epoch.
    pub created: i64,
    #[serde(default)]
    pub updated: i64,
    /// Human-entered duration, e.g. "2h". See [`super::duration::parse_duration`].
    pub duration: String,
    #[serde(default)]
    pub param_set: Map<String, Value>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Silence {
    /// First value recorded for a param key.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.param_set.get(key)?.as_array()?.first()?.as_str()
    }
}

/// A free-text comment attached to a silence.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Note {
    pub text: String,
    pub author: String,
    /// Seconds since the epoch.
    pub ts: i64,
}

/// A recurring weekly instant: a weekday at a whole hour. Recomputed
/// against "now" on every call; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayTarget {
    day: u32,
    hour: u32,
}

impl WeekdayTarget {
    /// `day` is 0 (Sunday) through 6 (Saturday), `hour` is 0 through 23.
    pub fn new(day: u32, hour: u32) -> Result<Self> {
        if day > 6 {
            anyhow::bail!("Invalid weekday {}, expected 0 (Sun) to 6 (Sat)", day);
        }
        if hour > 23 {
            anyhow::bail!("Invalid hour {}, expected 0 to 23", hour);
        }
        Ok(Self { day, hour })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_silence() {
        let json_data = json!({
            "id": "abc123",
            "user": "alice@example.org",
            "active": true,
            "created": 1700000000,
            "updated": 1700000100,
            "duration": "2h",
            "param_set": {
                "alertname": ["DiskFull"],
                "bot": ["build-01", "build-02"],
                "__silence_id": ["abc123"]
            },
            "notes": [
                { "text": "waiting on new disk", "author": "alice@example.org", "ts": 1700000050 }
            ]
        });

        let silence: Silence = serde_json::from_value(json_data).unwrap();
        assert_eq!(silence.id, "abc123");
        assert!(silence.active);
        assert_eq!(silence.duration, "2h");
        assert_eq!(silence.param("alertname"), Some("DiskFull"));
        assert_eq!(silence.param("bot"), Some("build-01"));
        assert_eq!(silence.param("missing"), None);
        assert_eq!(silence.notes.len(), 1);
    }

    #[test]
    fn test_deserialize_minimal_silence() {
        // Backends omit optional fields on fresh records.
        let json_data = json!({
            "active": false,
            "created": 1700000000,
            "duration": "1d"
        });

        let silence: Silence = serde_json::from_value(json_data).unwrap();
        assert!(silence.id.is_empty());
        assert!(silence.param_set.is_empty());
        assert!(silence.notes.is_empty());
    }

    #[test]
    fn test_weekday_target_ranges() {
        assert!(WeekdayTarget::new(0, 0).is_ok());
        assert!(WeekdayTarget::new(6, 23).is_ok());
        assert!(WeekdayTarget::new(7, 0).is_err());
        assert!(WeekdayTarget::new(0, 24).is_err());
    }
}
