use std::io::{self, Write};

use crate::config::{DEFAULT_API_BASE_URL, api_base_url, clean_api_key, data_dir, ensure_directories, env_file_path};
use crate::error::{Error, Result};

const API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Value of `key` in `.env` text, if the file sets it
fn env_value<'a>(contents: &'a str, key: &str) -> Option<&'a str> {
    contents.lines().find_map(|line| {
        let (name, value) = line.trim_start().split_once('=')?;
        (name.trim() == key).then(|| value.trim())
    })
}

/// Set `key=value` in `.env` text, replacing an existing assignment in place
/// and leaving every other line (base URL overrides, comments) untouched.
fn upsert_env_var(contents: &str, key: &str, value: &str) -> String {
    let assignment = format!("{}={}", key, value);
    let mut replaced = false;

    let mut lines: Vec<String> = contents
        .lines()
        .map(|line| match line.trim_start().split_once('=') {
            Some((name, _)) if name.trim() == key => {
                replaced = true;
                assignment.clone()
            }
            _ => line.to_string(),
        })
        .collect();
    if !replaced {
        lines.push(assignment);
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn prompt_api_key() -> Result<String> {
    print!("Enter your YouTube Data API key: ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input)
}

pub fn run(api_key: Option<String>, force: bool) -> Result<()> {
    ensure_directories()?;

    let env_file = env_file_path();
    let existing = if env_file.exists() {
        std::fs::read_to_string(&env_file)?
    } else {
        String::new()
    };

    if env_value(&existing, API_KEY_VAR).is_some_and(|v| !v.is_empty()) && !force {
        println!("{} is already set in {}", API_KEY_VAR, env_file.display());
        println!("Use --force to replace it.");
        return Ok(());
    }

    let raw = match api_key {
        Some(key) => key,
        None => prompt_api_key()?,
    };
    let api_key = clean_api_key(Some(raw))
        .ok_or_else(|| Error::Config("API key is required".to_string()))?;

    std::fs::write(&env_file, upsert_env_var(&existing, API_KEY_VAR, &api_key))?;

    println!("Saved {} to {}", API_KEY_VAR, env_file.display());
    println!("Data directory: {}", data_dir().display());
    if api_base_url() != DEFAULT_API_BASE_URL {
        println!("API requests go to {} (YOUTUBE_API_BASE_URL)", api_base_url());
    }

    Ok(())
}
