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
// Password generator

use log::{debug, warn};
use rand::Rng;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::charset::{CharacterPool, is_similar};
use crate::error::{PassgenError, Result};

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 12;

/// Options for one generation request. Lowercase letters are always part of
/// the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    /// Restrict symbols to `-._~`.
    pub url_safe: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_digits: true,
            include_symbols: false,
            exclude_similar: false,
            url_safe: false,
        }
    }
}

impl GenerationConfig {
    /// Default options with a checked length.
    pub fn new(length: usize) -> Result<Self> {
        let config = Self { length, ..Default::default() };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(PassgenError::LengthOutOfRange {
                length: self.length,
                min: MIN_LENGTH,
                max: MAX_LENGTH,
            });
        }
        Ok(())
    }

    pub fn clamped(self) -> Self {
        Self {
            length: self.length.clamp(MIN_LENGTH, MAX_LENGTH),
            ..self
        }
    }

    /// Length of the password this config produces. Exceeds `length` when
    /// more categories are enabled than there are slots.
    pub fn output_length(&self) -> usize {
        self.length.max(CharacterPool::assemble(self).category_count())
    }
}

pub fn generate_password(config: &GenerationConfig) -> Result<String> {
    let mut rng = OsRng;
    generate_password_with(config, &mut rng)
}

pub fn generate_password_with<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Result<String> {
    let pool = CharacterPool::assemble(config);
    generate_from_pool(&pool, config.length, rng)
}

/// Draws one character from every category, pads from the combined pool up
/// to `length` and shuffles. One character per category is always drawn, so
/// the result is longer than `length` when `length` is below the category
/// count.
///
/// Lengths above `MAX_LENGTH` are rejected. Shorter lengths, down to zero, are
/// accepted and padded up to the category count.
pub fn generate_from_pool<R: Rng + ?Sized>(pool: &CharacterPool, length: usize, rng: &mut R) -> Result<String> {
    if length > MAX_LENGTH {
        return Err(PassgenError::LengthOutOfRange {
            length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        });
    }
    if pool.is_empty() {
        return Err(PassgenError::EmptyPool);
    }
    debug!(
        "character pool assembled: {} characters across {} categories",
        pool.len(),
        pool.category_count()
    );
    if length < pool.category_count() {
        warn!(
            "requested length {} is below the {} enabled categories; password will be {} characters",
            length,
            pool.category_count(),
            pool.category_count()
        );
    }

    let all_chars = pool.combined();
    let mut password_chars = Vec::with_capacity(length.max(pool.category_count()));

    // Add one character from each category
    for (_, chars) in pool.categories() {
        if let Some(&c) = chars.choose(&mut *rng) {
            password_chars.push(c);
        }
    }

    // Add remaining characters from combined pool
    let padding = length.saturating_sub(password_chars.len());
    for _ in 0..padding {
        if let Some(&c) = all_chars.choose(&mut *rng) {
            password_chars.push(c);
        }
    }

    // Shuffle so the forced characters do not sit at the front
    password_chars.shuffle(&mut *rng);

    Ok(password_chars.into_iter().collect())
}

pub fn check_url_safe(password: &str) -> bool {
    password.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}

pub fn check_confusing_chars(password: &str) -> Vec<char> {
    password.chars().filter(|&c| is_similar(c)).collect()
}
