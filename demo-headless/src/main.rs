use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use nfdrs_core::core_types::Percent;
use nfdrs_core::{
    FireDangerResult, FuelModel, NfdrsEngine, WeatherObservation, DEFAULT_LIVE_FUEL_MOISTURE,
};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod input;

use input::StationRecord;

/// Batch fire danger calculator
#[derive(Parser, Debug)]
#[command(name = "nfdrs-headless")]
#[command(about = "NFDRS fire danger ratings from weather observations", long_about = None)]
struct Args {
    /// JSON array or JSON lines of observations ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Dry bulb temperature in °F (single observation mode)
    #[arg(short, long, requires = "humidity", requires = "wind_speed", conflicts_with = "input")]
    temperature: Option<f64>,

    /// Relative humidity in %
    #[arg(long, requires = "temperature")]
    humidity: Option<f64>,

    /// 20-ft wind speed in mph
    #[arg(short, long, requires = "temperature")]
    wind_speed: Option<f64>,

    /// 24-hour precipitation in inches (default 0)
    #[arg(short, long, requires = "temperature")]
    precipitation: Option<f64>,

    /// Live fuel moisture in % for records that do not carry their own
    #[arg(short, long)]
    live_fuel_moisture: Option<f64>,

    /// Fuel model
    #[arg(short, long, default_value_t = FuelModel::G)]
    fuel_model: FuelModel,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    station: Option<&'a str>,
    #[serde(flatten)]
    result: &'a FireDangerResult,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let engine = NfdrsEngine::new(args.fuel_model);
    let default_live = args
        .live_fuel_moisture
        .map_or(DEFAULT_LIVE_FUEL_MOISTURE, Percent::new);

    let records = match (args.temperature, args.humidity, args.wind_speed) {
        (Some(t), Some(rh), Some(wind)) => vec![StationRecord {
            station: None,
            weather: WeatherObservation::from_raw(t, rh, wind, args.precipitation.unwrap_or(0.0)),
            live_fuel_moisture: None,
        }],
        (None, _, _) => read_records(args.input.as_deref())?,
        _ => bail!("--temperature needs --humidity and --wind-speed"),
    };

    info!(
        records = records.len(),
        fuel_model = %engine.fuel_model(),
        live_fuel_moisture = %default_live,
        "Calculating fire danger"
    );

    let inputs: Vec<(WeatherObservation, Percent)> = records
        .iter()
        .map(|r| (r.weather, r.live_fuel_moisture.unwrap_or(default_live)))
        .collect();
    let results = engine.calculate_batch_with_live_moisture(&inputs);

    for (record, result) in records.iter().zip(&results) {
        print_result(record.station.as_deref(), result, args.format)?;
    }

    Ok(())
}

/// Read and parse records, reporting bad ones without stopping
fn read_records(path: Option<&Path>) -> Result<Vec<StationRecord>> {
    let text = match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let mut records = Vec::new();
    for parsed in input::parse_records(&text).context("Input is not a valid JSON array")? {
        match parsed {
            Ok(record) => records.push(record),
            Err(rejected) => {
                warn!(position = rejected.position, "Skipping malformed record");
                eprintln!("Error calculating fire danger: {rejected}");
            }
        }
    }
    Ok(records)
}

fn print_result(station: Option<&str>, result: &FireDangerResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => match station {
            Some(name) => println!("{name}: {result}"),
            None => println!("{result}"),
        },
        OutputFormat::Json => {
            let line = serde_json::to_string(&Report { station, result })?;
            println!("{line}");
        }
    }
    Ok(())
}
