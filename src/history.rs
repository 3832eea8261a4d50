use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // File-name-like token: word characters, a dot, a two-character
    // extension. Anchored at the token start; trailing text is allowed.
    static ref FILE_TOKEN: Regex = Regex::new(r"^\w+\.\w{2}").unwrap();
}

pub fn history_file_path() -> Result<PathBuf> {
    let home = env::var("HOME").context("HOME environment variable not set")?;
    Ok(Path::new(&home).join(".bash_history"))
}

/// Reads the whole history file once, as raw lines.
pub fn load_history(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read history file: {}", path.display()))?;
    Ok(contents.lines().map(|line| line.to_string()).collect())
}

/// Every line, trimmed, taken verbatim as a command. Blank lines are kept
/// and tally as empty commands.
pub fn extract_commands(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| line.trim().to_string()).collect()
}

/// Shell-tokenizes each line and keeps the tokens that look like bare
/// file names. Lines that fail to tokenize (unbalanced quoting) are
/// skipped; tokens holding a path separator are not file names here.
pub fn extract_file_tokens(lines: &[String]) -> Vec<String> {
    let mut files_list = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let words = match shlex::split(line) {
            Some(words) => words,
            None => continue,
        };
        for word in words {
            if FILE_TOKEN.is_match(&word) && !word.contains('/') {
                files_list.push(word);
            }
        }
    }
    files_list
}
