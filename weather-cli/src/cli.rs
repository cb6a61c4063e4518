use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use weather_core::{
    Config, Coordinates, IconColorTable, LocationError, TemperatureUnit, ViewState, WeatherQuery,
    WeatherSession, WeatherSource, location_channel,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city or coordinates")]
pub struct Cli {
    /// Headline unit: celsius (c) or fahrenheit (f). Defaults to the configured unit.
    #[arg(long, global = true)]
    pub unit: Option<TemperatureUnit>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weatherapi.com API key.
    Configure,

    /// Show weather for a city.
    Show {
        /// City name, e.g. "London".
        city: String,
    },

    /// Show weather for a latitude/longitude pair.
    Locate {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        long: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city } => {
                let query = WeatherQuery::City(city);
                show(self.unit, async move { Ok(query) }).await
            }
            Command::Locate { lat, long } => show(self.unit, locate(lat, long)).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    // Stored file only, so an env override is never persisted.
    let mut cfg = Config::load_from(&Config::config_file_path()?)?;

    let key = inquire::Password::new("weatherapi.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    cfg.set_api_key(key.trim().to_string());
    cfg.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

/// Stands in for a platform location service: validates the coordinates and
/// hands them over through the location channel.
async fn locate(lat: f64, long: f64) -> Result<WeatherQuery, LocationError> {
    let (tx, rx) = location_channel();

    tokio::spawn(async move {
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&long) {
            tx.resolve(Coordinates { latitude: lat, longitude: long });
        } else {
            tx.fail(LocationError::Unavailable(format!("coordinates out of range: {lat},{long}")));
        }
    });

    rx.recv().await
}

async fn show(
    unit: Option<TemperatureUnit>,
    resolve: impl Future<Output = Result<WeatherQuery, LocationError>>,
) -> anyhow::Result<ExitCode> {
    let cfg = Config::load()?;
    let unit = unit.unwrap_or_else(|| cfg.unit());
    let source = cfg.fetcher()?;
    let table = IconColorTable::load_or_degrade(cfg.icon_mapping.as_deref());

    let mut session = WeatherSession::new();
    let id = session.begin();
    if let Some(p) = session.placeholder() {
        eprintln!("{}", p.location_text);
    }

    match resolve.await {
        Ok(query) => {
            tracing::debug!(%query, "Resolved weather query");
            let result = source.fetch_weather(&query).await;
            session.complete(id, result, table.as_ref(), Utc::now());
        }
        Err(e) => {
            session.location_failed(id, e);
        }
    }

    match session.state() {
        ViewState::Displayed(d) => {
            println!("{}", render::descriptor(d, unit));
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            if let Some(p) = session.placeholder() {
                println!("{}", render::placeholder(&p));
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_unit() {
        let cli = Cli::try_parse_from(["weather", "show", "New York", "--unit", "f"]).unwrap();

        assert_eq!(cli.unit, Some(TemperatureUnit::Fahrenheit));
        assert!(matches!(cli.command, Command::Show { ref city } if city == "New York"));
    }

    #[test]
    fn parses_negative_coordinates() {
        let cli =
            Cli::try_parse_from(["weather", "locate", "--lat", "-33.87", "--long", "151.21"])
                .unwrap();

        assert!(matches!(cli.command, Command::Locate { lat, long } if lat == -33.87 && long == 151.21));
    }

    #[test]
    fn rejects_unknown_unit() {
        assert!(Cli::try_parse_from(["weather", "show", "Oslo", "--unit", "kelvin"]).is_err());
    }

    #[tokio::test]
    async fn locate_yields_coordinate_query() {
        let query = locate(43.65, -79.38).await.unwrap();
        assert_eq!(query, WeatherQuery::coordinates("43.65", "-79.38"));
    }

    #[tokio::test]
    async fn locate_rejects_out_of_range_latitude() {
        let err = locate(123.0, 0.0).await.unwrap_err();
        assert!(matches!(err, LocationError::Unavailable(_)));
    }
}
