//! Profile vocabulary and onboarding-field validation.
//!
//! Experience levels, skill categories, submission statuses and proof
//! difficulties are stored as upper snake-case TEXT with CHECK constraints.
//! The constants here must match `db/migrations`.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
   Experience levels
   -------------------------------------------------------------------------- */

pub const EXPERIENCE_BEGINNER: &str = "BEGINNER";
pub const EXPERIENCE_JUNIOR: &str = "JUNIOR";
pub const EXPERIENCE_MID: &str = "MID";
pub const EXPERIENCE_SENIOR: &str = "SENIOR";
pub const EXPERIENCE_STAFF: &str = "STAFF";
pub const EXPERIENCE_PRINCIPAL: &str = "PRINCIPAL";

pub const VALID_EXPERIENCE_LEVELS: &[&str] = &[
    EXPERIENCE_BEGINNER,
    EXPERIENCE_JUNIOR,
    EXPERIENCE_MID,
    EXPERIENCE_SENIOR,
    EXPERIENCE_STAFF,
    EXPERIENCE_PRINCIPAL,
];

/* --------------------------------------------------------------------------
   Skill categories
   -------------------------------------------------------------------------- */

pub const CATEGORY_FRONTEND: &str = "FRONTEND";
pub const CATEGORY_BACKEND: &str = "BACKEND";
pub const CATEGORY_FULLSTACK: &str = "FULLSTACK";
pub const CATEGORY_DEVOPS: &str = "DEVOPS";
pub const CATEGORY_DESIGN: &str = "DESIGN";
pub const CATEGORY_DATA: &str = "DATA";
pub const CATEGORY_OTHER: &str = "OTHER";

pub const VALID_SKILL_CATEGORIES: &[&str] = &[
    CATEGORY_FRONTEND,
    CATEGORY_BACKEND,
    CATEGORY_FULLSTACK,
    CATEGORY_DEVOPS,
    CATEGORY_DESIGN,
    CATEGORY_DATA,
    CATEGORY_OTHER,
];

/// Upper bound of a skill's `current_level`.
pub const MAX_SKILL_LEVEL: i16 = 10;

/// Upper bound of a skill's `confidence_score` and a submission's `final_score`.
pub const MAX_SCORE: i16 = 100;

/* --------------------------------------------------------------------------
   Submissions and proofs
   -------------------------------------------------------------------------- */

pub const SUBMISSION_DRAFT: &str = "DRAFT";
pub const SUBMISSION_SUBMITTED: &str = "SUBMITTED";
pub const SUBMISSION_UNDER_REVIEW: &str = "UNDER_REVIEW";
pub const SUBMISSION_COMPLETED: &str = "COMPLETED";
pub const SUBMISSION_REJECTED: &str = "REJECTED";

pub const VALID_SUBMISSION_STATUSES: &[&str] = &[
    SUBMISSION_DRAFT,
    SUBMISSION_SUBMITTED,
    SUBMISSION_UNDER_REVIEW,
    SUBMISSION_COMPLETED,
    SUBMISSION_REJECTED,
];

pub const DIFFICULTY_EASY: &str = "EASY";
pub const DIFFICULTY_MEDIUM: &str = "MEDIUM";
pub const DIFFICULTY_HARD: &str = "HARD";
pub const DIFFICULTY_EXPERT: &str = "EXPERT";

pub const VALID_DIFFICULTIES: &[&str] = &[
    DIFFICULTY_EASY,
    DIFFICULTY_MEDIUM,
    DIFFICULTY_HARD,
    DIFFICULTY_EXPERT,
];

/// Number of submissions included in the profile document.
pub const RECENT_SUBMISSIONS_LIMIT: i64 = 5;

/* --------------------------------------------------------------------------
   Onboarding fields
   -------------------------------------------------------------------------- */

/// Maximum length (in characters) of any free-text profile field.
pub const MAX_PROFILE_TEXT_LEN: usize = 2000;

/// Validate that `experience` is one of the known levels (case-sensitive).
pub fn validate_experience(experience: &str) -> Result<(), CoreError> {
    if VALID_EXPERIENCE_LEVELS.contains(&experience) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid experience '{experience}'. Must be one of: {}",
            VALID_EXPERIENCE_LEVELS.join(", ")
        )))
    }
}

/// Trim a free-text profile field and check it against [`MAX_PROFILE_TEXT_LEN`].
pub fn normalize_profile_text(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len > MAX_PROFILE_TEXT_LEN {
        return Err(CoreError::Validation(format!(
            "{field} too long: {len} chars (max {MAX_PROFILE_TEXT_LEN})"
        )));
    }
    Ok(trimmed.to_string())
}

/// Normalize the current-role field. An empty value after trimming clears it.
pub fn normalize_current_role(value: &str) -> Result<Option<String>, CoreError> {
    let role = normalize_profile_text("currentRole", value)?;
    Ok((!role.is_empty()).then_some(role))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn known_experience_levels_pass() {
        for level in VALID_EXPERIENCE_LEVELS {
            assert!(validate_experience(level).is_ok(), "{level} should be valid");
        }
    }

    #[test]
    fn experience_is_case_sensitive() {
        assert_matches!(validate_experience("senior"), Err(CoreError::Validation(_)));
        assert_matches!(validate_experience("LEAD"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn profile_text_is_trimmed() {
        assert_eq!(
            normalize_profile_text("careerGoals", "  ship things \n").unwrap(),
            "ship things"
        );
    }

    #[test]
    fn profile_text_length_counts_chars() {
        let ok = "é".repeat(MAX_PROFILE_TEXT_LEN);
        assert!(normalize_profile_text("dreamCompanies", &ok).is_ok());

        let too_long = "a".repeat(MAX_PROFILE_TEXT_LEN + 1);
        let err = normalize_profile_text("dreamCompanies", &too_long).unwrap_err();
        assert!(err.to_string().contains("dreamCompanies too long"));
    }

    #[test]
    fn blank_current_role_clears() {
        assert_eq!(normalize_current_role("   ").unwrap(), None);
        assert_eq!(
            normalize_current_role(" Backend Engineer ").unwrap().as_deref(),
            Some("Backend Engineer")
        );
    }
}
