//  ____                     ____               _
// |  _ \   __ _  ___  ___  / ___|  ___  _ __  | | __
// | |_) | / _` |/ __|/ __|| |  _  / _ \| '_ \ | |/ /
// |  __/ | (_| |\__ \\__ \| |_| ||  __/| | | ||   <
// |_|     \__,_||___/|___/ \____| \___||_| |_||_|\_\
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-05
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength assessment

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use zxcvbn::zxcvbn;

use crate::charset::Category;
use crate::error::{PassgenError, Result};

/// Length thresholds, one point each.
pub const LENGTH_TIERS: [usize; 4] = [8, 12, 16, 20];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: i32) -> Self {
        match score {
            i32::MIN..=3 => StrengthLabel::Weak,
            4..=5 => StrengthLabel::Medium,
            6..=7 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        };
        write!(f, "{}", label)
    }
}

/// Every factor that went into a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub score: i32,
    pub label: StrengthLabel,
    pub length: usize,
    pub length_tiers: usize,
    pub categories: Vec<Category>,
    pub high_uniqueness: bool,
    pub ascending_run: bool,
    pub repetition: bool,
}

pub fn score(password: &str) -> Result<StrengthLabel> {
    analyze(password).map(|report| report.label)
}

pub fn analyze(password: &str) -> Result<StrengthReport> {
    let chars: Vec<char> = password.chars().collect();
    if chars.is_empty() {
        return Err(PassgenError::EmptyPassword);
    }
    let length = chars.len();

    let length_tiers = LENGTH_TIERS.iter().filter(|&&tier| length >= tier).count();

    let categories: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|category| chars.iter().any(|&c| category.contains(c)))
        .collect();

    // unique / length > 0.7
    let unique = chars.iter().collect::<HashSet<_>>().len();
    let high_uniqueness = unique * 10 > length * 7;

    let ascending_run = has_ascending_run(&chars);
    let repetition = exceeds_repetition(&chars);

    let mut score = (length_tiers + categories.len()) as i32;
    if high_uniqueness {
        score += 1;
    }
    if ascending_run {
        score -= 1;
    }
    if repetition {
        score -= 1;
    }

    Ok(StrengthReport {
        score,
        label: StrengthLabel::from_score(score),
        length,
        length_tiers,
        categories,
        high_uniqueness,
        ascending_run,
        repetition,
    })
}

/// True if any three consecutive characters have code points increasing by
/// exactly one, e.g. `abc` or `789`.
pub fn has_ascending_run(chars: &[char]) -> bool {
    chars.windows(3).any(|window| {
        window
            .windows(2)
            .all(|pair| (pair[1] as u32).checked_sub(pair[0] as u32) == Some(1))
    })
}

/// True if some character makes up more than 30% of the password.
pub fn exceeds_repetition(chars: &[char]) -> bool {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for &c in chars {
        *counts.entry(c).or_insert(0) += 1;
    }
    let max_count = counts.values().copied().max().unwrap_or(0);
    max_count * 10 > chars.len() * 3
}

/// zxcvbn suggestions for improving a password. Does not affect the label.
pub fn feedback(password: &str) -> Vec<String> {
    if password.is_empty() {
        return Vec::new();
    }
    let strength_result = zxcvbn(password, &[]);
    strength_result.feedback().map_or_else(Vec::new, |f| {
        f.suggestions().iter().map(|s| s.to_string()).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_label_bands() {
        assert_eq!(StrengthLabel::from_score(-2), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(3), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(4), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(5), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(6), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(7), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(8), StrengthLabel::VeryStrong);
        assert_eq!(StrengthLabel::from_score(9), StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_label_ordering() {
        assert!(StrengthLabel::Weak < StrengthLabel::Medium);
        assert!(StrengthLabel::Medium < StrengthLabel::Strong);
        assert!(StrengthLabel::Strong < StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_ascending_run() {
        assert!(has_ascending_run(&chars("xyz9!!")));
        assert!(has_ascending_run(&chars("a123")));
        assert!(has_ascending_run(&chars("!\"#")));
        assert!(!has_ascending_run(&chars("qm4$9!")));
        assert!(!has_ascending_run(&chars("ab")));
        assert!(!has_ascending_run(&chars("cba")));
        assert!(!has_ascending_run(&chars("acegi")));
    }

    #[test]
    fn test_repetition_threshold() {
        // 3 of 10 is exactly 30%, not above it
        assert!(!exceeds_repetition(&chars("aaabcdefgh")));
        assert!(exceeds_repetition(&chars("aaaabcdefg")));
        assert!(exceeds_repetition(&chars("a")));
    }

    #[test]
    fn test_uniqueness_boundary() {
        // 7 unique of 10 is exactly 0.7, not above it
        let report = analyze("abcabcdefg").unwrap();
        assert!(!report.high_uniqueness);
        let report = analyze("qwertyuiop").unwrap();
        assert!(report.high_uniqueness);
    }

    #[test]
    fn test_feedback_empty() {
        assert!(feedback("").is_empty());
    }

    #[test]
    fn test_feedback_for_weak_password() {
        let suggestions = feedback("password");
        assert!(!suggestions.is_empty());
        assert!(suggestions.iter().all(|s| !s.is_empty()));
    }
}
