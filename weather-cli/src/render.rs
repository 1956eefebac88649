//! Terminal rendering of the weather card and the state views.

use weather_now_core::{Unit, WeatherReport, units};

pub fn weather_card(report: &WeatherReport, unit: Unit) {
    println!();
    println!("  {}  {}", report.icon_id, report.location_name);
    println!("  {:.2}, {:.2}", report.lat, report.lon);
    println!();
    println!(
        "  {}  {}",
        units::format_temperature(report.temperature_c, unit),
        report.condition_text
    );
    println!(
        "  Feels like  {}",
        units::format_temperature(report.apparent_temperature_c, unit)
    );
    println!("  Humidity    {}", units::format_humidity(report.humidity));
    println!("  Wind        {}", units::format_wind(report.wind_kph));
    println!();
}

/// The error announcement region: printed to stderr, last thing on screen so
/// it is what the user reads (and a screen reader lands on) after a failure.
pub fn error_block(message: &str) {
    eprintln!();
    eprintln!("  Something went wrong");
    eprintln!("  {message}");
    eprintln!();
}

pub fn empty_state() {
    println!("Search for current weather: enter a city name to see the conditions.");
}
