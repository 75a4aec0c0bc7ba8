//  ____                     ____               _
// |  _ \   __ _  ___  ___  / ___|  ___  _ __  | | __
// | |_) | / _` |/ __|/ __|| |  _  / _ \| '_ \ | |/ /
// |  __/ | (_| |\__ \\__ \| |_| ||  __/| | | ||   <
// |_|     \__,_||___/|___/ \____| \___||_| |_||_|\_\
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Character categories and pool assembly

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::passgen::GenerationConfig;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation, in code point order.
pub const SYMBOLS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
pub const URL_SAFE_SYMBOLS: &str = "-._~";

/// Glyphs that are easy to mistake for one another.
pub const SIMILAR_CHARS: [char; 6] = ['I', 'l', '1', 'O', '0', 'o'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Lowercase,
        Category::Uppercase,
        Category::Digit,
        Category::Symbol,
    ];

    /// Classifies a character. Anything outside ASCII letters, digits and
    /// punctuation has no category.
    pub fn of(c: char) -> Option<Category> {
        if c.is_ascii_lowercase() {
            Some(Category::Lowercase)
        } else if c.is_ascii_uppercase() {
            Some(Category::Uppercase)
        } else if c.is_ascii_digit() {
            Some(Category::Digit)
        } else if c.is_ascii_punctuation() {
            Some(Category::Symbol)
        } else {
            None
        }
    }

    pub fn contains(self, c: char) -> bool {
        Category::of(c) == Some(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Lowercase => "lowercase",
            Category::Uppercase => "uppercase",
            Category::Digit => "digit",
            Category::Symbol => "symbol",
        };
        write!(f, "{}", name)
    }
}

pub fn is_similar(c: char) -> bool {
    SIMILAR_CHARS.contains(&c)
}

/// The per-category character sets a password is drawn from.
///
/// Only non-empty categories are kept, in the fixed order
/// lowercase, uppercase, digit, symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterPool {
    sets: Vec<(Category, Vec<char>)>,
}

impl CharacterPool {
    pub fn from_sets<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = (Category, &'a str)>,
    {
        let sets = sets
            .into_iter()
            .filter(|(_, chars)| !chars.is_empty())
            .map(|(category, chars)| (category, chars.chars().collect()))
            .collect();
        Self { sets }
    }

    pub fn assemble(config: &GenerationConfig) -> Self {
        // 小写字母始终包含
        let mut lowercase = LOWERCASE.to_string();
        let mut uppercase = if config.include_uppercase { UPPERCASE.to_string() } else { String::new() };
        let mut digits = if config.include_digits { DIGITS.to_string() } else { String::new() };
        let mut symbols = match (config.include_symbols, config.url_safe) {
            (false, _) => String::new(),
            (true, true) => URL_SAFE_SYMBOLS.to_string(),
            (true, false) => SYMBOLS.to_string(),
        };

        if config.exclude_similar {
            lowercase.retain(|c| !is_similar(c));
            uppercase.retain(|c| !is_similar(c));
            digits.retain(|c| !is_similar(c));
            symbols.retain(|c| !is_similar(c));
        }

        Self::from_sets([
            (Category::Lowercase, lowercase.as_str()),
            (Category::Uppercase, uppercase.as_str()),
            (Category::Digit, digits.as_str()),
            (Category::Symbol, symbols.as_str()),
        ])
    }

    pub fn categories(&self) -> impl Iterator<Item = (Category, &[char])> {
        self.sets.iter().map(|(category, chars)| (*category, chars.as_slice()))
    }

    pub fn category_count(&self) -> usize {
        self.sets.len()
    }

    pub fn contains_category(&self, category: Category) -> bool {
        self.sets.iter().any(|(c, _)| *c == category)
    }

    /// All characters concatenated in category order.
    pub fn combined(&self) -> Vec<char> {
        self.sets.iter().flat_map(|(_, chars)| chars.iter().copied()).collect()
    }

    pub fn len(&self) -> usize {
        self.sets.iter().map(|(_, chars)| chars.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
