use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::{
    constants::SECONDS_PER_DAY,
    error::{Result, TleError},
    helpers::full_year,
};

///Packed TLE epoch (YYDDD.dddddddd) to a UTC date time.
///Seconds are rounded, a rounded 60 carries into the minute (and on into the next day)
pub fn epoch_datetime(epoch_day_fraction: f64) -> Result<NaiveDateTime> {
    if !epoch_day_fraction.is_finite() || epoch_day_fraction < 0. {
        return Err(TleError::OutOfRange(format!(
            "epoch {epoch_day_fraction} is not a valid YYDDD.dddddddd value"
        )));
    }
    let two_digit = (epoch_day_fraction / 1000.).floor();
    if two_digit > 99. {
        return Err(TleError::OutOfRange(format!(
            "epoch {epoch_day_fraction} has more than two year digits"
        )));
    }
    let year = full_year(two_digit as u8);
    let day_fraction = epoch_day_fraction - two_digit * 1000.;
    let day_of_year = day_fraction.floor();
    let date = NaiveDate::from_yo_opt(year, day_of_year as u32).ok_or_else(|| {
        TleError::OutOfRange(format!("day {day_of_year} is not in year {year}"))
    })?;
    let seconds = ((day_fraction - day_of_year) * SECONDS_PER_DAY).round() as i64;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
        TleError::OutOfRange(format!("no midnight on {date}"))
    })?;
    midnight
        .checked_add_signed(Duration::seconds(seconds))
        .ok_or_else(|| TleError::OutOfRange(format!("epoch {epoch_day_fraction} overflows")))
}

///`HH:MM:SS UTC D Month YYYY`
pub fn format_epoch(epoch_day_fraction: f64) -> Result<String> {
    let datetime = epoch_datetime(epoch_day_fraction)?;
    Ok(datetime.format("%H:%M:%S UTC %-d %B %Y").to_string())
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_format_epoch() {
        //0.36999458 day = 31967.53 s
        assert_eq!(
            format_epoch(25078.36999458).unwrap(),
            "08:52:48 UTC 19 March 2025"
        );
        assert_eq!(
            format_epoch(23120.77859283).unwrap(),
            "18:41:10 UTC 30 April 2023"
        );
    }

    #[test]
    fn test_cutoff_year() {
        assert_eq!(epoch_datetime(61001.).unwrap().year(), 1961);
        assert_eq!(epoch_datetime(60001.).unwrap().year(), 2060);
        assert_eq!(format_epoch(1.5).unwrap(), "12:00:00 UTC 1 January 2000");
    }

    #[test]
    fn test_second_rollover() {
        //86399.9991 s rounds to the next midnight
        let datetime = epoch_datetime(24001.99999999).unwrap();
        assert_eq!(datetime.day(), 2);
        assert_eq!(datetime.hour(), 0);
        assert_eq!(format_epoch(24001.99999999).unwrap(), "00:00:00 UTC 2 January 2024");
        //Last second of a year carries into the next one
        assert_eq!(format_epoch(23365.99999999).unwrap(), "00:00:00 UTC 1 January 2024");
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(format_epoch(24366.25).unwrap(), "06:00:00 UTC 31 December 2024");
        assert_eq!(format_epoch(24060.).unwrap(), "00:00:00 UTC 29 February 2024");
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(epoch_datetime(24000.5), Err(TleError::OutOfRange(_))));
        assert!(matches!(epoch_datetime(23366.5), Err(TleError::OutOfRange(_))));
        assert!(matches!(epoch_datetime(24367.), Err(TleError::OutOfRange(_))));
        assert!(matches!(epoch_datetime(-1.), Err(TleError::OutOfRange(_))));
        assert!(matches!(epoch_datetime(f64::NAN), Err(TleError::OutOfRange(_))));
        assert!(matches!(epoch_datetime(100001.), Err(TleError::OutOfRange(_))));
    }
}
