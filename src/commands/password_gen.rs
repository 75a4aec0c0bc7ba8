use anyhow::{Context, Result, bail};
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use passgenk::error::PassgenError;
use passgenk::passgen::GenerationConfig;
use passgenk::suggest::{Suggestion, suggest_with};

#[derive(Debug, Clone, Copy)]
pub struct GenOutput {
    pub count: usize,
    pub seed: Option<u64>,
    pub json: bool,
    pub feedback: bool,
}

pub fn generate_random(config: GenerationConfig, clamp: bool, output: &GenOutput) -> Result<()> {
    let config = if clamp {
        config.clamped()
    } else {
        config.validate().context("Invalid generation options")?;
        config
    };

    let mut rng: Box<dyn RngCore> = match output.seed {
        Some(seed) => Box::new(ChaCha20Rng::seed_from_u64(seed)),
        None => Box::new(OsRng),
    };

    let mut suggestions = Vec::new();
    for _ in 0..output.count {
        let suggestion = match suggest_with(&config, &mut *rng) {
            Ok(s) => s,
            Err(PassgenError::EmptyPool) => bail!(PassgenError::EmptyPool),
            Err(e) => return Err(e).context("Failed to generate password"),
        };
        suggestions.push(if output.feedback { suggestion.with_feedback() } else { suggestion });
    }

    if output.json {
        let text = if suggestions.len() == 1 {
            serde_json::to_string_pretty(&suggestions[0])?
        } else {
            serde_json::to_string_pretty(&suggestions)?
        };
        println!("{}", text);
    } else {
        for suggestion in &suggestions {
            print_suggestion(suggestion);
        }
    }
    Ok(())
}

fn print_suggestion(suggestion: &Suggestion) {
    println!("Generated password: {}", suggestion.password);
    println!(
        "Password strength: {} (score: {})",
        suggestion.strength.label, suggestion.strength.score
    );
    if !suggestion.feedback.is_empty() {
        println!("Suggestions: {}", suggestion.feedback.join(" "));
    }
}
