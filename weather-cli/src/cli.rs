use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use weather_now_core::{SearchSession, Settings, Unit, ViewState, WeatherClient};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-now", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UnitArg {
    C,
    F,
}

impl From<UnitArg> for Unit {
    fn from(value: UnitArg) -> Self {
        match value {
            UnitArg::C => Unit::Celsius,
            UnitArg::F => Unit::Fahrenheit,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    Show {
        /// City name to search for.
        city: String,

        /// Temperature unit for display.
        #[arg(long, value_enum, default_value_t = UnitArg::C)]
        unit: UnitArg,

        /// Use the offline mock fixture instead of the network.
        #[arg(long)]
        mock: bool,
    },

    /// Search repeatedly with prompts, retries and unit toggling.
    Interactive {
        /// Use the offline mock fixture instead of the network.
        #[arg(long)]
        mock: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let settings = Settings::from_env();
        init_tracing(&settings);
        let client = WeatherClient::new(&settings);

        match self.command {
            Command::Show { city, unit, mock } => show(&client, &city, unit.into(), mock).await,
            Command::Interactive { mock } => interactive(&client, mock).await,
        }
    }
}

fn init_tracing(settings: &Settings) {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn show(client: &WeatherClient, city: &str, unit: Unit, mock: bool) -> Result<()> {
    let mut session = SearchSession::new();
    if !session.search(client, city, mock.then_some(true)).await {
        bail!("Please enter a city name to search.");
    }

    match session.state() {
        ViewState::Success(report) => {
            render::weather_card(report, unit);
            Ok(())
        }
        ViewState::Error(message) => {
            render::error_block(message);
            bail!("weather lookup failed");
        }
        state => bail!("search ended in unexpected state: {state:?}"),
    }
}

enum Next {
    NewSearch,
    ToggleUnit,
    Retry,
    Quit,
}

async fn interactive(client: &WeatherClient, mock: bool) -> Result<()> {
    let use_mock = mock.then_some(true);
    let mut session = SearchSession::new();
    let mut unit = Unit::default();

    render::empty_state();

    loop {
        let city = inquire::Text::new("City:").prompt()?;
        if !session.search(client, &city, use_mock).await {
            println!("Enter a city name to search.");
            continue;
        }

        loop {
            let next = match session.state() {
                ViewState::Success(report) => {
                    render::weather_card(report, unit);
                    let toggle = match unit {
                        Unit::Celsius => "Show °F",
                        Unit::Fahrenheit => "Show °C",
                    };
                    match inquire::Select::new("Next:", vec!["New search", toggle, "Quit"])
                        .prompt()?
                    {
                        "New search" => Next::NewSearch,
                        "Quit" => Next::Quit,
                        _ => Next::ToggleUnit,
                    }
                }
                ViewState::Error(message) => {
                    render::error_block(message);
                    match inquire::Select::new("Next:", vec!["Retry", "New search", "Quit"])
                        .prompt()?
                    {
                        "Retry" => Next::Retry,
                        "New search" => Next::NewSearch,
                        _ => Next::Quit,
                    }
                }
                _ => Next::NewSearch,
            };

            match next {
                Next::NewSearch => break,
                Next::Quit => return Ok(()),
                Next::ToggleUnit => unit = unit.toggle(),
                Next::Retry => {
                    let _ = session.retry_with(client, use_mock).await;
                }
            }
        }
    }
}
