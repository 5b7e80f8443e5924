//! Sensor name → verdict mapping produced by one log evaluation

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::Verdict;

/// Verdicts keyed by sensor name.
///
/// Names compare case-insensitively. Re-inserting a name replaces the verdict
/// but keeps the casing it was first seen with. Iteration is ordered by the
/// case-folded name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorResults {
    entries: BTreeMap<String, (String, Verdict)>,
}

impl SensorResults {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a verdict, returning the one it replaced
    pub fn insert(&mut self, name: impl Into<String>, verdict: Verdict) -> Option<Verdict> {
        let name = name.into();
        match self.entries.get_mut(&fold(&name)) {
            Some(entry) => Some(std::mem::replace(&mut entry.1, verdict)),
            None => {
                self.entries.insert(fold(&name), (name, verdict));
                None
            }
        }
    }

    /// Look up a sensor's verdict by name, ignoring case
    pub fn get(&self, name: &str) -> Option<Verdict> {
        self.entries.get(&fold(name)).map(|(_, verdict)| *verdict)
    }

    /// Is there a verdict for this sensor?
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&fold(name))
    }

    /// Number of sensors with a verdict
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No sensor produced a verdict
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate (name, verdict) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, Verdict)> {
        self.entries.values().map(|(name, verdict)| (name.as_str(), *verdict))
    }

    /// Number of sensors whose readings can be relied on
    pub fn trusted_count(&self) -> usize {
        self.iter().filter(|(_, verdict)| verdict.is_trusted()).count()
    }

    /// Render as a flat JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Render as an indented JSON object
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Ordinal case fold: each char maps to its single-char uppercase form.
/// Chars whose uppercase expands (e.g. 'ß') are left as they are.
fn fold(name: &str) -> String {
    name.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) => u,
                _ => c,
            }
        })
        .collect()
}

impl Serialize for SensorResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, verdict) in self.iter() {
            map.serialize_entry(name, &verdict)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SensorResults {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Verdict>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

impl<S: Into<String>> FromIterator<(S, Verdict)> for SensorResults {
    fn from_iter<I: IntoIterator<Item = (S, Verdict)>>(iter: I) -> Self {
        let mut results = Self::new();
        for (name, verdict) in iter {
            results.insert(name, verdict);
        }
        results
    }
}
