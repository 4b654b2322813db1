use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use lyricline_core::{tokenize, Config, SqliteStore, WordStore};

pub fn run(config: &Config, file: &Path, yes: bool) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Cannot read words from {:?}", file))?;
    let words: Vec<String> = tokenize(&text).into_iter().map(String::from).collect();
    if words.is_empty() {
        bail!("No words found in {:?}", file);
    }

    println!("Found {} words in {:?}", words.len(), file);
    if !yes {
        let stdin = io::stdin();
        let confirmed = confirm(
            &mut stdin.lock(),
            &mut io::stdout(),
            "Replace the stored word list?",
        )?;
        if !confirmed {
            println!("Aborted, stored words left unchanged");
            return Ok(());
        }
    }

    let store = SqliteStore::new(&config.store.path).context("Failed to open word store")?;
    store
        .set_words(&words)
        .context("Failed to store word list")?;
    info!(words = words.len(), "Word list replaced");
    println!("Stored {} words", words.len());
    Ok(())
}

/// Ask a yes/no question until the answer is recognised.
///
/// An empty answer means yes; end of input means no.
fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    loop {
        write!(output, "{} [Y/n] ", question)?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(false);
        }
        match answer.trim().to_lowercase().as_str() {
            "" | "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please answer y or n.")?,
        }
    }
}
