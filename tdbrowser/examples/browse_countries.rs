//! Example: Browse the directory by country
//!
//! Run with: cargo run -p tdbrowser --example browse_countries

use tdbrowser::RadioBrowserClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = RadioBrowserClient::new()?;

    let countries = client.country_directories().await?;
    println!("{} browsable countries\n", countries.len());

    for country in countries.iter().take(10) {
        println!("  {} ({} stations)", country.display_name(), country.station_count);
    }

    // Drill into the first country, like a menu would
    if let Some(country) = countries.first() {
        println!("\n=== Stations in {} ===", country.display_name());
        let stations = client.stations_by_country(&country.name).await?;

        for station in stations.iter().take(15) {
            println!(
                "  {} [{} {} kbps] {}",
                station.name, station.codec, station.bitrate, station.url
            );
        }
        println!("  ... {} stations total", stations.len());
    }

    Ok(())
}
