//! Ordered label counts.
//!
//! [`AttributeCounts`] serializes as a JSON object whose keys appear in
//! the order each label was first counted, which is the order the front
//! end renders them in.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Per-label counts kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeCounts(Vec<(String, usize)>);

impl AttributeCounts {
    /// Empty counts.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Add one to `label`, appending it if this is its first occurrence.
    pub fn increment(&mut self, label: &str) {
        match self.0.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count = count.saturating_add(1),
            None => self.0.push((label.to_owned(), 1)),
        }
    }

    /// Count for `label`, if it was seen.
    pub fn get(&self, label: &str) -> Option<usize> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, c)| *c)
    }

    /// Labels and counts in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Labels in first-seen order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(l, _)| l.as_str())
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.0.iter().fold(0_usize, |acc, (_, c)| acc.saturating_add(*c))
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for AttributeCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, count) in &self.0 {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CountsVisitor)
    }
}

struct CountsVisitor;

impl<'de> Visitor<'de> for CountsVisitor {
    type Value = AttributeCounts;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of label to count")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((label, count)) = access.next_entry::<String, usize>()? {
            entries.push((label, count));
        }
        Ok(AttributeCounts(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let mut counts = AttributeCounts::new();
        for label in ["マイペース", "アクティブ", "マイペース", "ラブリー"] {
            counts.increment(label);
        }
        let labels: Vec<&str> = counts.labels().collect();
        assert_eq!(labels, vec!["マイペース", "アクティブ", "ラブリー"]);
        assert_eq!(counts.get("マイペース"), Some(2));
        assert_eq!(counts.get("リラックス"), None);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let mut counts = AttributeCounts::new();
        counts.increment("b");
        counts.increment("a");
        counts.increment("b");
        let json = serde_json::to_string(&counts).unwrap_or_default();
        assert_eq!(json, r#"{"b":2,"a":1}"#);

        let back: Result<AttributeCounts, _> = serde_json::from_str(&json);
        assert!(back.is_ok_and(|b| b == counts));
    }
}
