// SPDX-FileCopyrightText: 2026 Strongbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic password strength scoring.

use serde::Serialize;

use crate::generator::SYMBOLS;

/// Trivial passwords that always score zero (compared case-insensitively).
pub const COMMON_PASSWORDS: [&str; 4] = ["password", "123456", "qwerty", "admin"];

/// Highest score [`score_password`] can return.
pub const MAX_SCORE: u8 = 6;

/// Score, label, and improvement hints for one password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub score: u8,
    pub strength_label: &'static str,
    pub feedback: Vec<String>,
}

/// Score a password from 0 to 6.
///
/// Length contributes up to 2 points and each of lowercase, uppercase,
/// digit, and symbol contributes 1. A deny-list match forces the score to 0.
/// Never fails.
pub fn score_password(password: &str) -> StrengthReport {
    let mut feedback = Vec::new();
    let mut score = 0u8;

    let length = password.chars().count();
    if length >= 12 {
        score += 2;
    } else if length >= 8 {
        score += 1;
    } else {
        feedback.push("Password should be at least 8 characters long".to_string());
    }

    let checks: [(fn(char) -> bool, &str); 4] = [
        (char::is_lowercase, "Include lowercase letters"),
        (char::is_uppercase, "Include uppercase letters"),
        (|c| c.is_ascii_digit(), "Include numbers"),
        (|c| SYMBOLS.contains(c), "Include symbols"),
    ];
    for (present, hint) in checks {
        if password.chars().any(present) {
            score += 1;
        } else {
            feedback.push(hint.to_string());
        }
    }

    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        score = 0;
        feedback.push("Avoid common passwords".to_string());
    }

    StrengthReport {
        score,
        strength_label: strength_label(score),
        feedback,
    }
}

/// Fixed score-to-label lookup.
pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 => "Very Weak",
        1 => "Weak",
        2 => "Fair",
        3 => "Good",
        4 => "Strong",
        5 => "Very Strong",
        6 => "Excellent",
        _ => "Unknown",
    }
}
