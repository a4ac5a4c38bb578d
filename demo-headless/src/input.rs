//! Station records read from JSON input

use nfdrs_core::core_types::Percent;
use nfdrs_core::WeatherObservation;
use serde::Deserialize;
use std::fmt;

/// One line (or array element) of input
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationRecord {
    /// Optional station label, echoed in the output
    #[serde(default)]
    pub station: Option<String>,
    #[serde(flatten)]
    pub weather: WeatherObservation,
    /// Per-record live fuel moisture, overrides the command line value
    #[serde(default)]
    pub live_fuel_moisture: Option<Percent>,
}

/// A record that failed to parse, with its 1-based position in the input
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub position: usize,
    pub message: String,
}

impl fmt::Display for RejectedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}: {}", self.position, self.message)
    }
}

/// Parse either a JSON array of records or JSON lines
///
/// Each record is parsed on its own so a malformed record does not stop the
/// rest of the batch. Blank lines are skipped.
///
/// # Errors
/// Returns an error only when the input starts with `[` but is not a valid
/// JSON array.
pub fn parse_records(
    text: &str,
) -> Result<Vec<Result<StationRecord, RejectedRecord>>, serde_json::Error> {
    let values: Vec<Result<serde_json::Value, serde_json::Error>> =
        if text.trim_start().starts_with('[') {
            serde_json::from_str::<Vec<serde_json::Value>>(text)?
                .into_iter()
                .map(Ok)
                .collect()
        } else {
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .map(serde_json::from_str::<serde_json::Value>)
                .collect()
        };

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .and_then(serde_json::from_value::<StationRecord>)
                .map_err(|err| RejectedRecord {
                    position: index + 1,
                    message: err.to_string(),
                })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_lines() {
        let text = r#"
{"station": "KBOI", "temperature": 95.0, "relative_humidity": 15.0, "wind_speed": 30.0}

{"temperature": 60.0, "relative_humidity": 90.0, "wind_speed": 2.0, "precipitation": 0.5, "live_fuel_moisture": 80.0}
"#;
        let records = parse_records(text).unwrap();

        assert_eq!(records.len(), 2);
        let first = records[0].as_ref().unwrap();
        assert_eq!(first.station.as_deref(), Some("KBOI"));
        assert_eq!(first.weather, WeatherObservation::from_raw(95.0, 15.0, 30.0, 0.0));

        let second = records[1].as_ref().unwrap();
        assert_eq!(second.live_fuel_moisture, Some(Percent::new(80.0)));
        assert_eq!(*second.weather.precipitation(), 0.5);
    }

    #[test]
    fn test_parse_json_array() {
        let text = r#"[
            {"temperature": 70.0, "relative_humidity": 50.0, "wind_speed": 0.0},
            {"temperature": 88.0, "relative_humidity": 20.0, "wind_speed": 15.0}
        ]"#;
        let records = parse_records(text).unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(Result::is_ok));
    }

    #[test]
    fn test_bad_records_do_not_stop_the_batch() {
        let text = concat!(
            "{\"temperature\": 70.0, \"wind_speed\": 5.0}\n",
            "not json\n",
            "{\"temperature\": 70.0, \"relative_humidity\": 40.0, \"wind_speed\": 5.0}\n",
        );
        let records = parse_records(text).unwrap();

        assert_eq!(records.len(), 3);
        let missing = records[0].as_ref().unwrap_err();
        assert_eq!(missing.position, 1);
        assert!(missing.message.contains("relative_humidity"), "{}", missing.message);
        assert_eq!(records[1].as_ref().unwrap_err().position, 2);
        assert!(records[1].as_ref().unwrap_err().to_string().starts_with("record 2: "));
        assert!(records[2].is_ok());
    }

    #[test]
    fn test_malformed_array_is_an_error() {
        assert!(parse_records("[{\"temperature\": 70.0").is_err());
    }
}
