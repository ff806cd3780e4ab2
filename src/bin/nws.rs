//! Interactive forecast lookup: Open-Meteo geocoding + National Weather
//! Service forecast periods, filtered by a user-supplied date range.

use std::io;

use tracing_subscriber::EnvFilter;

use weathercast::config::WeathercastConfig;
use weathercast::geocoding::OpenMeteoClient;
use weathercast::nws::NwsClient;
use weathercast::{filter, input, report};

fn main() {
    // All failure paths print a message and exit normally
    if let Err(err) = try_main() {
        println!("{}", err.user_message());
    }
}

fn try_main() -> weathercast::Result<()> {
    let config = WeathercastConfig::load()?;
    init_tracing(&config);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    let query = input::read_city_state(&mut reader, &mut stdout)?;
    let range = input::read_date_range(&mut reader, &mut stdout)?;

    let geocoder = OpenMeteoClient::new(&config)?;
    let location = geocoder.geocode(&query.query_string())?;
    println!(
        "Found {} at {}",
        location.name,
        location.format_coordinates()
    );

    let client = NwsClient::new(&config)?;
    let periods = client.forecast(location.latitude, location.longitude)?;
    let periods = filter::periods_in_range(periods, &range);

    report::print_periods(&mut stdout, &periods)
}

fn init_tracing(config: &WeathercastConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
