use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;

/// Read the raw record text from `path`, or stdin for `None` / `-`
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read word records from {}", path.display())),
        _ => {
            if atty::is(atty::Stream::Stdin) {
                anyhow::bail!("No word records: pass --input or pipe them on stdin");
            }

            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read word records from stdin")?;
            Ok(text)
        }
    }
}
