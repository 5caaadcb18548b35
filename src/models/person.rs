//! Staff member model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A staff member and the areas they are eligible to work in.
///
/// A person with no skill matching any scenario area can be allocated
/// to no area and accrues zero hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique person identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Area ids this person may be allocated to.
    pub skills: BTreeSet<String>,
}

impl Person {
    /// Creates a new person.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            skills: BTreeSet::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an area skill.
    pub fn with_skill(mut self, area_id: impl Into<String>) -> Self {
        self.skills.insert(area_id.into());
        self
    }

    /// Whether this person may work in the given area.
    #[inline]
    pub fn has_skill(&self, area_id: &str) -> bool {
        self.skills.contains(area_id)
    }
}
