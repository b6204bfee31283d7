//! Student verification settings.
//!
//! The registry of known students is a fixed table shipped in `config.toml`;
//! the bot never writes to it.

use serde::Deserialize;
use std::collections::HashMap;

/// One registered student.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentEntry {
    /// Student id as typed by the student
    pub id: String,
    /// Display name used in the nickname
    pub name: String,
}

/// The `[verification]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Expected 3rd and 4th digits of a student id
    pub faculty_code: String,
    /// Server role granted to verified members
    pub role_name: String,
    /// Known students
    pub students: Vec<StudentEntry>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            faculty_code: "07".to_string(),
            role_name: "Student".to_string(),
            students: Vec::new(),
        }
    }
}

impl VerificationConfig {
    /// Builds the id -> display name lookup table.
    #[must_use]
    pub fn registry(&self) -> HashMap<String, String> {
        self.students
            .iter()
            .map(|s| (s.id.trim().to_string(), s.name.trim().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_trims_entries() {
        let config = VerificationConfig {
            students: vec![StudentEntry {
                id: " 65070001 ".to_string(),
                name: "Somchai ".to_string(),
            }],
            ..VerificationConfig::default()
        };
        let registry = config.registry();
        assert_eq!(registry.get("65070001").map(String::as_str), Some("Somchai"));
    }
}
