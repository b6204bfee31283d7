//! Student verification - checks a submitted student id against the faculty
//! code and the configured registry.
//!
//! The Discord side effects (role, nickname) are performed by the command;
//! this module only decides who the student is and how to report each step.

use crate::config::verification::VerificationConfig;
use crate::errors::{Error, Result};
use std::fmt;

/// Minimum length of a student id.
pub const MIN_STUDENT_ID_LEN: usize = 8;
/// Discord's nickname length limit, in characters.
pub const MAX_NICKNAME_LEN: usize = 32;

/// Checks the shape of a student id and returns it trimmed.
///
/// # Errors
/// [`Error::InvalidStudentId`] when the id is too short, not numeric, or its
/// 3rd-4th digits are not `faculty_code`.
pub fn validate_student_id(id: &str, faculty_code: &str) -> Result<String> {
    let id = id.trim();
    if id.chars().count() < MIN_STUDENT_ID_LEN {
        return Err(Error::InvalidStudentId {
            reason: format!("it must be at least {MIN_STUDENT_ID_LEN} digits long"),
        });
    }
    if !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidStudentId {
            reason: "it must contain digits only".to_string(),
        });
    }
    if id.get(2..4) != Some(faculty_code) {
        return Err(Error::InvalidStudentId {
            reason: format!("digits 3-4 must be the faculty code {faculty_code}"),
        });
    }
    Ok(id.to_string())
}

/// A student found in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedStudent {
    /// Validated, trimmed id
    pub id: String,
    /// Name from the registry
    pub name: String,
}

impl VerifiedStudent {
    /// `"<id> | <name>"`, cut to Discord's nickname limit.
    #[must_use]
    pub fn nickname(&self) -> String {
        format!("{} | {}", self.id, self.name)
            .chars()
            .take(MAX_NICKNAME_LEN)
            .collect()
    }
}

/// Validates `id` and looks the student up.
///
/// # Errors
/// [`Error::InvalidStudentId`] or [`Error::UnknownStudent`].
pub fn verify_student(config: &VerificationConfig, id: &str) -> Result<VerifiedStudent> {
    let id = validate_student_id(id, &config.faculty_code)?;
    let name = config
        .registry()
        .remove(&id)
        .ok_or_else(|| Error::UnknownStudent { id: id.clone() })?;
    Ok(VerifiedStudent { id, name })
}

/// Result of granting the verification role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleOutcome {
    /// Role granted now
    Assigned(String),
    /// Member already had the role
    AlreadyHad(String),
    /// No role with that name on the server
    Missing(String),
    /// Bot lacks permission to grant it
    Forbidden(String),
    /// Any other Discord error
    Failed(String),
}

impl fmt::Display for RoleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assigned(role) => write!(f, "✅ Role **{role}** assigned"),
            Self::AlreadyHad(role) => write!(f, "ℹ️ You already have the **{role}** role"),
            Self::Missing(role) => write!(f, "⚠️ Role **{role}** does not exist on this server"),
            Self::Forbidden(role) => {
                write!(f, "❌ I am not allowed to assign the **{role}** role")
            }
            Self::Failed(reason) => write!(f, "❌ Could not assign the role: {reason}"),
        }
    }
}

/// Result of renaming the member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NicknameOutcome {
    /// Nickname changed
    Set(String),
    /// Nickname already matched
    AlreadySet(String),
    /// Bot lacks permission, e.g. for the server owner
    Forbidden,
    /// Any other Discord error
    Failed(String),
}

impl fmt::Display for NicknameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(nick) => write!(f, "✅ Nickname changed to `{nick}`"),
            Self::AlreadySet(nick) => write!(f, "ℹ️ Nickname is already `{nick}`"),
            Self::Forbidden => write!(f, "❌ I am not allowed to change your nickname"),
            Self::Failed(reason) => write!(f, "❌ Could not change your nickname: {reason}"),
        }
    }
}

/// Message summarising a verification attempt.
#[must_use]
pub fn verification_report(
    student: &VerifiedStudent,
    role: &RoleOutcome,
    nickname: &NicknameOutcome,
) -> String {
    format!(
        "**Verified:** {} ({})\n{role}\n{nickname}",
        student.name, student.id
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_verification_config;

    #[test]
    fn test_valid_id_passes() {
        assert_eq!(validate_student_id(" 65070001 ", "07").unwrap(), "65070001");
    }

    #[test]
    fn test_short_id_is_rejected() {
        let result = validate_student_id("6507001", "07");
        assert!(matches!(result, Err(Error::InvalidStudentId { reason }) if reason.contains("8")));
    }

    #[test]
    fn test_wrong_faculty_code_is_rejected() {
        let result = validate_student_id("65010001", "07");
        assert!(
            matches!(result, Err(Error::InvalidStudentId { reason }) if reason.contains("faculty"))
        );
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        assert!(validate_student_id("65a70001", "07").is_err());
        assert!(validate_student_id("6507000x", "07").is_err());
    }

    #[test]
    fn test_verify_student_looks_up_registry() {
        let config = sample_verification_config();
        let student = verify_student(&config, "65070001").unwrap();
        assert_eq!(student.name, "Somchai Jaidee");
        assert_eq!(student.nickname(), "65070001 | Somchai Jaidee");
    }

    #[test]
    fn test_verify_unknown_student() {
        let config = sample_verification_config();
        let result = verify_student(&config, "65079999");
        assert!(matches!(result, Err(Error::UnknownStudent { id }) if id == "65079999"));
    }

    #[test]
    fn test_nickname_is_truncated_to_discord_limit() {
        let student = VerifiedStudent {
            id: "65070001".to_string(),
            name: "Supercalifragilistic Expialidocious".to_string(),
        };
        assert_eq!(student.nickname().chars().count(), MAX_NICKNAME_LEN);
    }

    #[test]
    fn test_report_lists_each_step() {
        let student = VerifiedStudent {
            id: "65070001".to_string(),
            name: "Somchai".to_string(),
        };
        let report = verification_report(
            &student,
            &RoleOutcome::Missing("Student".to_string()),
            &NicknameOutcome::Set(student.nickname()),
        );
        assert!(report.contains("Role **Student** does not exist"));
        assert!(report.contains("`65070001 | Somchai`"));
    }
}
