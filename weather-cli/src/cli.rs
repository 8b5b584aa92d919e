use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::error;

use weather_core::{Location, OpenWeatherClient, config};

const LOCATION_FORMAT_HELP: &str = "\
For location, the formatting should be \"City STATE COUNTRY\". State and country codes should follow ISO3166

Examples:
  Chicago
  Chicago IL
  Chicago IL US";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Calls openweathermap.org for weather information",
    after_help = LOCATION_FORMAT_HELP
)]
pub struct Cli {
    /// Location to search for (ie. Chicago IL)
    #[arg(short, long)]
    pub location: Option<String>,

    /// API Key used to interact with openweathermap. Optional if using .env
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,
}

impl Cli {
    pub async fn run(self) -> ExitCode {
        let Cli { location, api_key } = self;

        let api_key = match config::resolve_api_key(api_key) {
            Ok(key) => key,
            Err(err) => {
                error!("{err}");
                return ExitCode::from(err.exit_code());
            }
        };

        let raw_location = match resolve_raw_location(location, prompt_location) {
            Ok(raw) => raw,
            Err(err) => {
                error!("Failed to read a location: {err}");
                return ExitCode::FAILURE;
            }
        };

        let location = match Location::parse(&raw_location) {
            Ok(location) => location,
            Err(err) => {
                error!("A validation error has occurred: {err}");
                Cli::command().print_help().ok();
                return ExitCode::from(err.exit_code());
            }
        };

        let client = OpenWeatherClient::new(api_key);

        match client.current_weather(&location).await {
            Ok(report) => {
                println!("{report}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!("{err}");
                ExitCode::from(err.exit_code())
            }
        }
    }
}

/// An explicit flag value wins; otherwise ask on the terminal.
fn resolve_raw_location(
    explicit: Option<String>,
    prompt: impl FnOnce() -> anyhow::Result<String>,
) -> anyhow::Result<String> {
    match explicit {
        Some(location) => Ok(location),
        None => prompt(),
    }
}

fn prompt_location() -> anyhow::Result<String> {
    Ok(inquire::Text::new("Where are you?").prompt()?)
}
