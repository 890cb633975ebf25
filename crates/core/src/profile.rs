//! Profile and gamification constants.

use crate::error::CoreError;

/// Number of entries returned by the leaderboard query.
pub const LEADERBOARD_LIMIT: i64 = 20;

/// Substituted at response time for profiles without an uploaded image.
/// Never persisted.
pub const DEFAULT_PROFILE_IMAGE: &str = "https://cdn.ecosort.app/assets/default-avatar.png";

/// Quiz scores fold into the profile points total, which is monotonically
/// non-decreasing; negative submissions are rejected outright.
pub fn validate_quiz_score(score: i32) -> Result<(), CoreError> {
    if score < 0 {
        return Err(CoreError::Validation(
            "Quiz score must not be negative".into(),
        ));
    }
    Ok(())
}
