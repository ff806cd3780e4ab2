//! Interactive forecast lookup: OpenCage geocoding + OpenWeatherMap daily
//! forecast, filtered by a user-supplied date range.

use std::io;

use tracing_subscriber::EnvFilter;

use weathercast::config::WeathercastConfig;
use weathercast::opencage::OpenCageClient;
use weathercast::openweather::OpenWeatherClient;
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

    let query = input::read_city_zip(&mut reader, &mut stdout)?;
    let range = input::read_date_range(&mut reader, &mut stdout)?;

    let geocoder = OpenCageClient::new(&config)?;
    let location = geocoder.geocode(&query.query_string())?;
    println!("Coordinates fetched: {}", location.format_coordinates());

    let client = OpenWeatherClient::new(&config)?;
    let periods = client.daily_forecast(location.latitude, location.longitude)?;
    let periods = filter::daily_in_range(periods, &range);

    report::print_daily(&mut stdout, &periods)
}

fn init_tracing(config: &WeathercastConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
