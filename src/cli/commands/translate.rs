use anyhow::{Result, bail};
use inquire::{Select, Text};
use std::io::IsTerminal;

use crate::config::AppConfig;
use crate::input::InputReader;
use crate::translation::{
    TranslateError, TranslationClient, TranslationDirection, TranslationRequest,
};
use crate::ui::{self, Spinner, Style};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct TranslateOptions {
    pub text: Option<String>,
    pub direction: Option<String>,
}

pub async fn run_translate(config: &AppConfig, options: TranslateOptions) -> Result<()> {
    let direction = options
        .direction
        .as_deref()
        .map(str::parse::<TranslationDirection>)
        .transpose()?;

    let client = TranslationClient::new(&config.endpoint)?;

    if let Some(text) = options.text {
        return translate_once(&client, text, direction.unwrap_or_default()).await;
    }

    if std::io::stdin().is_terminal() {
        run_interactive(&client, config, direction).await
    } else {
        let text = InputReader::read_stdin()?;
        translate_once(&client, text, direction.unwrap_or_default()).await
    }
}

async fn translate_once(
    client: &TranslationClient,
    text: String,
    direction: TranslationDirection,
) -> Result<()> {
    let request = TranslationRequest::new(text.trim_end_matches(['\r', '\n']), direction);
    if request.is_empty() {
        bail!("Error: Input is empty");
    }

    let spinner = Spinner::new("Translating...");
    let result = client.translate(&request).await;
    spinner.stop();

    let response = result?;
    println!("{}", response.translated_text.trim());
    Ok(())
}

/// Prompt loop: pick a direction, enter a sentence, see the translation.
///
/// Ends on an empty sentence or when a prompt is cancelled. Failed
/// translations are reported and the loop continues.
async fn run_interactive(
    client: &TranslationClient,
    config: &AppConfig,
    fixed_direction: Option<TranslationDirection>,
) -> Result<()> {
    print_header(config);

    loop {
        let direction = match fixed_direction {
            Some(direction) => direction,
            None => {
                let selected = ui::cancellable(
                    Select::new("Translation Direction", TranslationDirection::ALL.to_vec())
                        .prompt(),
                )?;
                let Some(direction) = selected else { break };
                direction
            }
        };

        let prompt = format!("Source Sentence ({}):", direction.source().name());
        let Some(text) = ui::cancellable(Text::new(&prompt).prompt())? else {
            break;
        };

        let request = TranslationRequest::new(text, direction);
        if request.is_empty() {
            break;
        }

        let spinner = Spinner::new("Translating...");
        let result = client.translate(&request).await;
        spinner.stop();

        match result {
            Ok(response) => {
                println!(
                    "{} {}",
                    Style::label(format!("{}:", direction.target().name())),
                    Style::value(response.translated_text.trim())
                );
                println!();
            }
            Err(e) => print_error(&e),
        }
    }

    println!("{}", Style::success("Goodbye!"));
    Ok(())
}

fn print_header(config: &AppConfig) {
    println!(
        "{} {} - Interactive Translation Mode",
        Style::header("nusa"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "  {}   {}",
        Style::label("model"),
        Style::value(&config.endpoint.model)
    );
    println!(
        "  {} {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint.base_url)
    );
    println!(
        "{}",
        Style::hint("Enter an empty sentence or press Esc to quit.")
    );
    println!();
}

fn print_error(err: &TranslateError) {
    eprintln!("{} {err}", Style::error("Error:"));
    eprintln!();
}
