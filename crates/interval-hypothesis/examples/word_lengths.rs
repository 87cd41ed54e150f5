//! Are words in one corpus shorter than in another?
//!
//! Usage: `cargo run --example word_lengths -- <x.txt> <y.txt> [less|greater|not-equal]`
//!
//! Each file is split on whitespace, ASCII punctuation is stripped, empty
//! tokens are dropped and every word becomes its character count. The mean
//! word lengths are then compared with 95% t-intervals.

use anyhow::{bail, Context, Result};
use interval_hypothesis::{HypothesisConfig, HypothesisTest, HypothesisTestKind};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn word_lengths(path: &Path) -> Result<Vec<usize>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    Ok(text
        .split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|c| !c.is_ascii_punctuation())
                .count()
        })
        .filter(|&len| len > 0)
        .collect())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("usage: word_lengths <x.txt> <y.txt> [less|greater|not-equal]");
    }
    let kind: HypothesisTestKind = match args.get(2) {
        Some(kind) => kind.parse()?,
        None => HypothesisTestKind::LessThan,
    };

    let x_path = Path::new(&args[0]);
    let y_path = Path::new(&args[1]);
    let x = word_lengths(x_path)?;
    let y = word_lengths(y_path)?;
    println!("{}: {} words, {}: {} words", x_path.display(), x.len(), y_path.display(), y.len());

    let label = |p: &Path| {
        p.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| p.display().to_string())
    };
    let config = HypothesisConfig::new(kind).with_labels(label(x_path), label(y_path));
    let outcome = HypothesisTest::new(config).means(&x, &y)?;

    println!("{outcome}");
    Ok(())
}
