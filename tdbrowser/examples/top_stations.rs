//! Example: Vote-ranked listing, id round trip and playable URL
//!
//! Run with: cargo run -p tdbrowser --example top_stations

use tdbrowser::RadioBrowserClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = RadioBrowserClient::new()?;

    let stations = client.stations_by_votes(Some(10)).await?;
    println!("Top {} stations by votes:\n", stations.len());

    for station in &stations {
        println!("  {:>7} votes  {}  ({})", station.votes, station.name, station.id);
    }

    if let Some(top) = stations.first() {
        // The local id resolves from the cache without a second request
        let cached = client.station_by_id(&top.id).await?;
        println!(
            "\nLookup {} -> {}",
            top.id,
            cached.map(|s| s.name).unwrap_or_else(|| "not found".into())
        );

        // Unwrap playlists into a directly playable stream URL
        let mut station = top.clone();
        client.resolve_playable_url(&mut station).await;
        println!("Playable URL: {}", station.url);
    }

    Ok(())
}
