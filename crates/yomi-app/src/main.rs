use anyhow::Context;
use clap::Parser;
use yomi_core::preprocess::SelectionPreprocessor;
use yomi_lang_japanese::{ResultExtras, WordRecordLoader};

mod cli;
mod expand;
mod io;
mod logging;
mod profile;

use self::cli::Args;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = profile::load_config(args.config.as_deref())?;
    if args.pretty {
        config.output.pretty = true;
    }

    logging::init(&config.logging);

    let input = io::read_input(args.input.as_deref())?;
    let records = WordRecordLoader::parse(&input).context("Failed to decode word records")?;

    let preprocessor = SelectionPreprocessor::new(config.selection.clone());
    let extras = ResultExtras {
        reason: args.reason,
        romaji: args.romaji,
    };
    let results = expand::expand_records(&records, &args.text, &preprocessor, &extras);
    tracing::info!("Expanded {} word records", results.len());

    let output = expand::render(&results, config.output.pretty)?;
    println!("{output}");

    Ok(())
}
