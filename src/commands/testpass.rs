use anyhow::Result;
use serde_json::json;

use passgenk::error::PassgenError;
use passgenk::passgen;
use passgenk::strength;

pub fn test_password(
    password: &str,
    check_url_safe: bool,
    check_confusion: bool,
    json: bool,
    feedback: bool,
) -> Result<()> {
    let report = match strength::analyze(password) {
        Ok(report) => Some(report),
        Err(PassgenError::EmptyPassword) => None,
        Err(e) => return Err(e.into()),
    };
    let suggestions = if feedback { strength::feedback(password) } else { Vec::new() };

    if json {
        let mut value = json!({ "strength": report });
        if check_url_safe {
            value["url_safe"] = json!(passgen::check_url_safe(password));
        }
        if check_confusion {
            value["confusing_chars"] = json!(passgen::check_confusing_chars(password));
        }
        if feedback {
            value["feedback"] = json!(suggestions);
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match &report {
        Some(report) => println!("Password strength: {} (score: {})", report.label, report.score),
        None => println!("Password strength: not applicable (empty password)"),
    }
    if !suggestions.is_empty() {
        println!("Suggestions: {}", suggestions.join(" "));
    }

    if check_url_safe {
        let is_safe = passgen::check_url_safe(password);
        println!("URL-safe: {}", if is_safe { "Yes" } else { "No" });
    }

    if check_confusion {
        let confusing = passgen::check_confusing_chars(password);
        if !confusing.is_empty() {
            println!("Potentially confusing characters: {:?}", confusing);
        } else {
            println!("No confusing characters detected");
        }
    }
    Ok(())
}
