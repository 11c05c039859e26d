use anyhow::Result;
use clap::Parser;

use nusa_translator::cli::commands::{load_config, translate};
use nusa_translator::cli::{Args, Command};
use nusa_translator::logging;
use nusa_translator::translation::{print_examples, print_languages};
use nusa_translator::web;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let options = args.resolve_options();

    match args.command {
        Command::Languages => {
            print_languages();
        }
        Command::Examples => {
            print_examples();
        }
        Command::Serve { .. } => {
            logging::init(logging::SERVER_FILTER);
            let config = load_config(args.config.as_deref(), &options)?;
            web::serve(config).await?;
        }
        Command::Translate { text, direction } => {
            logging::init(logging::CLI_FILTER);
            let config = load_config(args.config.as_deref(), &options)?;
            let options = translate::TranslateOptions { text, direction };
            translate::run_translate(&config, options).await?;
        }
    }

    Ok(())
}
