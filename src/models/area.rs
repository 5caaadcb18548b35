//! Operational area model.
//!
//! An area is a staffed location (ward, line, desk) with a criticality
//! ranking and a minimum headcount per shift code, applying to every day
//! the operation runs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An operational area with per-shift minimum staffing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    /// Unique area identifier (also the skill name people carry).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Importance ranking (higher = staffed first). Default 1.
    pub criticality: u8,
    /// Minimum headcount required during each shift code.
    pub min_by_shift: BTreeMap<String, u32>,
}

impl Area {
    /// Creates a new area.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            criticality: 1,
            min_by_shift: BTreeMap::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the criticality ranking.
    pub fn with_criticality(mut self, criticality: u8) -> Self {
        self.criticality = criticality;
        self
    }

    /// Sets the minimum headcount for a shift code.
    pub fn with_min(mut self, code: impl Into<String>, min: u32) -> Self {
        self.min_by_shift.insert(code.into(), min);
        self
    }

    /// Shift codes with a positive minimum, ordered by descending
    /// headcount then ascending code.
    ///
    /// This is the order the allocator fills an area in: the most demanded
    /// shift first, alphabetical on ties.
    pub fn demanded_codes(&self) -> Vec<(&str, u32)> {
        let mut codes: Vec<(&str, u32)> = self
            .min_by_shift
            .iter()
            .filter(|(_, &min)| min > 0)
            .map(|(code, &min)| (code.as_str(), min))
            .collect();
        codes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        codes
    }

    /// The single most demanded shift code, if any minimum is positive.
    pub fn busiest_code(&self) -> Option<&str> {
        self.demanded_codes().first().map(|(code, _)| *code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_builder() {
        let a = Area::new("icu")
            .with_name("Intensive Care")
            .with_criticality(5)
            .with_min("M", 2)
            .with_min("N", 1);

        assert_eq!(a.id, "icu");
        assert_eq!(a.name, "Intensive Care");
        assert_eq!(a.criticality, 5);
        assert_eq!(a.min_by_shift.get("M"), Some(&2));
        assert_eq!(a.min_by_shift.get("T"), None);
    }

    #[test]
    fn test_demanded_codes_order() {
        let a = Area::new("floor")
            .with_min("N", 1)
            .with_min("T", 2)
            .with_min("M", 2)
            .with_min("X", 0);

        // Descending headcount, ascending code on ties; zero minimums drop out.
        assert_eq!(a.demanded_codes(), vec![("M", 2), ("T", 2), ("N", 1)]);
        assert_eq!(a.busiest_code(), Some("M"));
    }

    #[test]
    fn test_busiest_code_empty() {
        let a = Area::new("idle");
        assert_eq!(a.busiest_code(), None);
    }

    #[test]
    fn test_default_criticality() {
        assert_eq!(Area::new("x").criticality, 1);
    }
}
