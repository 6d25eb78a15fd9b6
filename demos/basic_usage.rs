use std::process::exit;

use zipcodebase_client::http::Client;
use zipcodebase_client::{Result, Unit};

fn main() -> Result<()> {
    // Expect the API key as the first argument, with an optional
    // base URL after it
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <api_key> [base_url]", args[0]);
        exit(1);
    }

    let mut client = Client::new(args[1].clone());
    if let Some(base_url) = args.get(2) {
        client = client.with_base_url(base_url);
    }

    // Look up a postal code
    let info = client.postal_code_info("10001", None)?;
    println!("Postal code info: {info:#}");

    // Distance between two postal codes
    let distance = client.calculate_distance("10001", "20001", None, Some(Unit::Miles))?;
    println!("\nDistance: {distance:#}");

    // Postal codes within a 10 km radius
    let nearby = client.codes_within_radius("10001", 10, None, None)?;
    println!("\nWithin radius: {nearby:#}");

    // Postal codes within 10 km of any of these codes
    let matches = client.codes_within_distance("10001,10005,10006", 10, None, None)?;
    println!("\nWithin distance: {matches:#}");

    // Postal codes by city and by state
    let by_city = client.codes_by_city("Bikaner", Some("IN"), None, None)?;
    println!("\nCodes in Bikaner: {by_city:#}");

    let by_state = client.codes_by_state("Rajasthan", Some("IN"), Some(200))?;
    println!("\nCodes in Rajasthan: {by_state:#}");

    // List the provinces of a country
    let states = client.states_by_country(Some("IN"))?;
    println!("\nProvinces: {states:#}");

    // Remaining account credits
    let credits = client.credits()?;
    println!("\nCredits: {credits:#}");

    Ok(())
}
