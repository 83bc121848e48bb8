//! Criterion counting and label mapping.

use super::types::Strength;

/// The fixed special-character set recognized by criterion 5.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Scores a password against the five strength criteria.
///
/// Each satisfied criterion contributes one point; the point count maps
/// to a [`Strength`] label. An empty password is [`Strength::Weak`]
/// unconditionally, without evaluating any criterion.
///
/// # Examples
///
/// ```
/// use u_ruleval::password::{check_password_strength, Strength};
///
/// assert_eq!(check_password_strength(""), Strength::Weak);
/// assert_eq!(check_password_strength("abc123"), Strength::Medium);
/// assert_eq!(check_password_strength("Abc12345!"), Strength::VeryStrong);
/// ```
pub fn check_password_strength(password: &str) -> Strength {
    if password.is_empty() {
        return Strength::Weak;
    }

    let mut score = 0;
    if password.chars().count() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        score += 1;
    }

    match score {
        0 | 1 => Strength::Weak,
        2 | 3 => Strength::Medium,
        4 => Strength::Strong,
        _ => Strength::VeryStrong,
    }
}
