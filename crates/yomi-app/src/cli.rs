use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "yomi", about = "Expands stored word records for a text selection")]
pub struct Args {
    /// Text the user selected
    #[arg(short, long)]
    pub text: String,

    /// Word records, one JSON object per line or a JSON array. Reads stdin
    /// when omitted or `-`
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Deinflection reason forwarded to every result
    #[arg(long)]
    pub reason: Option<String>,

    /// Romanized forms forwarded to every result, comma separated
    #[arg(long, value_delimiter = ',')]
    pub romaji: Option<Vec<String>>,

    /// Pretty print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// JSON config file; the environment is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
