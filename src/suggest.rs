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
// Generate-then-score entry point for front ends

use rand::Rng;
use rand::rngs::OsRng;
use serde::Serialize;

use crate::error::Result;
use crate::passgen::{GenerationConfig, generate_password_with};
use crate::strength::{StrengthReport, analyze};

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub password: String,
    pub strength: StrengthReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub feedback: Vec<String>,
}

/// Called again on every configuration change. An empty pool is returned as
/// `PassgenError::EmptyPool` before anything is scored.
pub fn suggest(config: &GenerationConfig) -> Result<Suggestion> {
    let mut rng = OsRng;
    suggest_with(config, &mut rng)
}

pub fn suggest_with<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Result<Suggestion> {
    let password = generate_password_with(config, rng)?;
    let strength = analyze(&password)?;
    Ok(Suggestion {
        password,
        strength,
        feedback: Vec::new(),
    })
}

impl Suggestion {
    pub fn with_feedback(mut self) -> Self {
        self.feedback = crate::strength::feedback(&self.password);
        self
    }
}
