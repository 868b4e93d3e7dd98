use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context;
use yomi_config::Config;

/// Load the config from `path`, or from the environment when there is none
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    let file = File::open(path)
        .with_context(|| format!("Failed to open config {}", path.display()))?;
    parse_config(BufReader::new(file))
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

fn parse_config(reader: impl Read) -> anyhow::Result<Config> {
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let json = r#"{ "output": { "pretty": true }, "logging": { "json": true } }"#;
        let config = parse_config(json.as_bytes()).unwrap();

        assert!(config.output.pretty);
        assert!(config.logging.json);
        assert_eq!(config.logging.filter, "info");
        assert!(config.selection.nfkc);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Some(Path::new("/nonexistent/yomi.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to open config"));
    }
}
