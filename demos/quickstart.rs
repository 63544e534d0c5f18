//! Quickstart: prayer times for a few cities.
//!
//! Run with: `cargo run --example quickstart`

use chrono::NaiveDate;
use praytime::{
    AsrFactor, CalculationConfig, Convention, Event, HighLatitudeRule, Location, PrayerCalculator,
    Tuning,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).ok_or("invalid date")?;

    // 1. Default configuration (Jafari, angle-based high-latitude rule)
    let sydney = Location::with_timezone_name(-33.8688, 151.2093, "Australia/Sydney")?;
    let times = PrayerCalculator::default().compute(&sydney, date)?;
    println!("Sydney, {date} (Jafari)\n{times}\n");

    // 2. A different convention with the Hanafi Asr factor
    let new_york = Location::with_timezone_name(40.7128, -74.006, "America/New_York")?;
    let config = CalculationConfig::new(Convention::Isna).with_asr_factor(AsrFactor::Hanafi);
    let times = PrayerCalculator::new(config).compute(&new_york, date)?;
    println!("New York, {date} (ISNA, Hanafi)\n{times}\n");

    // 3. High latitude in midsummer, with and without a correction rule
    let midsummer = NaiveDate::from_ymd_opt(2024, 6, 21).ok_or("invalid date")?;
    let london = Location::with_timezone_name(51.5074, -0.1278, "Europe/London")?;
    for rule in [HighLatitudeRule::None, HighLatitudeRule::AngleBased] {
        let config = CalculationConfig::new(Convention::Mwl).with_high_latitude(rule);
        let times = PrayerCalculator::new(config).compute(&london, midsummer)?;
        println!("London, {midsummer} (MWL, {rule:?})\n{times}\n");
    }

    // 4. Per-event tuning in minutes
    let tuning = Tuning::ZERO.with(Event::Fajr, 2.0).with(Event::Isha, -3.0);
    let config = CalculationConfig::default().with_tuning(tuning);
    let times = PrayerCalculator::new(config).compute(&sydney, date)?;
    println!("Sydney, {date} (tuned Fajr +2, Isha -3)\n{times}");

    Ok(())
}
