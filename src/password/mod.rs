//! Password strength scoring.
//!
//! Evaluates a password against five independent criteria and maps the
//! number of satisfied criteria to one of four ordered strength labels:
//!
//! 1. At least 8 characters long.
//! 2. Contains an uppercase Latin letter.
//! 3. Contains a lowercase Latin letter.
//! 4. Contains a decimal digit.
//! 5. Contains a character from a fixed special-character set.
//!
//! 0–1 criteria is [`Strength::Weak`], 2–3 is [`Strength::Medium`],
//! 4 is [`Strength::Strong`], and all 5 is [`Strength::VeryStrong`].
//! The empty string short-circuits to `Weak` before any criterion is
//! evaluated.

mod eval;
mod types;

pub use eval::{check_password_strength, SPECIAL_CHARS};
pub use types::Strength;
