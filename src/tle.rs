//! Token based TLE reader.
//!
//! Both data lines are split on whitespace and their tokens concatenated, fields
//! are then picked by position. Checksums and column layout are not verified.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TleError};

const LINE_ONE_TOKENS: usize = 9;
const MIN_LINE_TWO_TOKENS: usize = 8;

const YEAR: usize = 2;
const EPOCH: usize = 3;
const SAT_ID: usize = 10;
const INCLINATION: usize = 11;
const RAAN: usize = 12;
const ECCENTRICITY: usize = 13;
const ARG_PERIGEE: usize = 14;
const MEAN_ANOMALY: usize = 15;
const MEAN_MOTION: usize = 16;

///Raw TLE fields, angles in degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TleRecord {
    pub name: String,
    pub satellite_id: u32,
    pub epoch_year_two_digit: u8,
    ///Packed YYDDD.dddddddd as written in the TLE
    pub epoch_day_fraction: f64,
    pub inclination: f64,
    pub raan: f64,
    pub eccentricity: f64,
    pub arg_perigee: f64,
    pub mean_anomaly: f64,
    ///Revolutions per day
    pub mean_motion: f64,
}

impl TleRecord {
    ///Name line followed by the two data lines
    pub fn from_lines(lines: [&str; 3]) -> Result<TleRecord> {
        let name = lines[0].split_whitespace().collect::<Vec<_>>().join(" ");
        let first: Vec<&str> = lines[1].split_whitespace().collect();
        let second: Vec<&str> = lines[2].split_whitespace().collect();
        if first.len() != LINE_ONE_TOKENS {
            return Err(TleError::MalformedInput(format!(
                "line 1 has {} tokens, expected {LINE_ONE_TOKENS}",
                first.len()
            )));
        }
        if second.len() < MIN_LINE_TWO_TOKENS {
            return Err(TleError::MalformedInput(format!(
                "line 2 has {} tokens, expected at least {MIN_LINE_TWO_TOKENS}",
                second.len()
            )));
        }
        let data: Vec<&str> = first.into_iter().chain(second).collect();

        let year_digits = data[YEAR].get(..2).ok_or_else(|| {
            TleError::MalformedInput(format!("designator '{}' too short for a year", data[YEAR]))
        })?;
        let record = TleRecord {
            name,
            satellite_id: parse_field(data[SAT_ID], "satellite id")?,
            epoch_year_two_digit: parse_field(year_digits, "year")?,
            epoch_day_fraction: parse_field(data[EPOCH], "epoch")?,
            inclination: parse_field(data[INCLINATION], "inclination")?,
            raan: parse_field(data[RAAN], "RAAN")?,
            eccentricity: parse_field(&format!("0.{}", data[ECCENTRICITY]), "eccentricity")?,
            arg_perigee: parse_field(data[ARG_PERIGEE], "argument of perigee")?,
            mean_anomaly: parse_field(data[MEAN_ANOMALY], "mean anomaly")?,
            mean_motion: parse_field(data[MEAN_MOTION], "mean motion")?,
        };
        debug!(name = %record.name, id = record.satellite_id, "parsed TLE");
        Ok(record)
    }

    ///Whole TLE as one string, leading blank lines are skipped
    pub fn from_str_lines(tle: &str) -> Result<TleRecord> {
        let lines: Vec<&str> = tle
            .lines()
            .skip_while(|line| line.trim().is_empty())
            .take(3)
            .collect();
        match lines.as_slice() {
            [name, first, second] => TleRecord::from_lines([*name, *first, *second]),
            _ => Err(TleError::MalformedInput(format!(
                "expected 3 lines, found {}",
                lines.len()
            ))),
        }
    }
}

fn parse_field<T: std::str::FromStr>(token: &str, field: &str) -> Result<T> {
    token
        .parse::<T>()
        .map_err(|_| TleError::MalformedInput(format!("could not parse {field} from '{token}'")))
}
