use clap::{Parser, Subcommand};
use chrono::DateTime;
use chrono::Utc;
use dayplan::models::intent::Locale;
use dayplan::service::parser::parse_command;
use inquire::Text;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one schedule command and print the intent as JSON.
    Parse {
        text: String,
        /// Reference instant (RFC 3339); defaults to now.
        #[arg(long)]
        reference: Option<DateTime<Utc>>,
        #[arg(long)]
        locale: Option<String>,
    },
    /// Read commands interactively.
    ParsePrompt {},
}

pub fn cli(default_locale: String) {
    // Fine to panic here
    let cli = Cli::parse();
    match &cli.command {
        Commands::Parse {
            text,
            reference,
            locale,
        } => {
            let reference = reference.unwrap_or_else(Utc::now);
            let locale = locale.clone().unwrap_or(default_locale);
            print_intent(text, reference, &locale);
        }
        Commands::ParsePrompt {} => {
            if let Err(e) = parse_from_prompt(&default_locale) {
                println!("Failed to read command from prompt {}", e);
            }
        }
    }
}

fn parse_from_prompt(locale: &str) -> Result<(), Box<dyn std::error::Error>> {
    let text = Text::new("Enter a schedule command.").prompt()?;
    print_intent(&text, Utc::now(), locale);
    Ok(())
}

fn print_intent(text: &str, reference: DateTime<Utc>, locale: &str) {
    let locale: Locale = match locale.parse() {
        Ok(locale) => locale,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };
    match parse_command(text, reference, locale) {
        Some(intent) => match serde_json::to_string_pretty(&intent) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("Failed to serialize intent: {}", e),
        },
        None => println!("Could not understand command"),
    }
}
