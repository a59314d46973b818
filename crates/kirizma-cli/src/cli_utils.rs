//! Common CLI utility functions shared across commands.

use std::io::Read;

use anyhow::{Context, Result};

/// Read a whole file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) if path != "-" => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Write to `path`, or print to stdout.
pub fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, content).with_context(|| format!("Failed to write {}", path))?;
        eprintln!("Written to: {}", path);
    } else {
        println!("{}", content);
    }
    Ok(())
}
