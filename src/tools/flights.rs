//! Real-time flight search backed by the google-flights2 RapidAPI service.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use super::Tool;

const FLIGHTS_ENDPOINT: &str = "https://google-flights2.p.rapidapi.com/api/v1/searchFlights";
const FLIGHTS_HOST: &str = "google-flights2.p.rapidapi.com";
const CURRENCY: &str = "INR";

/// How many of the provider's top results make it into the observation.
const MAX_RESULTS: usize = 3;

/// Searches live flights between two places on a date. Origin and
/// destination are given as city names (or IATA codes directly) and are
/// resolved to airport codes before the provider call.
pub struct FlightSearch {
    api_key: Option<String>,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct FlightSearchArgs {
    origin: String,
    destination: String,
    departure_date: String,
}

impl FlightSearch {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Tool for FlightSearch {
    fn name(&self) -> &str {
        "search_flights"
    }

    fn description(&self) -> &str {
        "Finds real-time flights for a given origin, destination, and date \
         using a flight data API. The input must be a JSON object with the \
         keys 'origin', 'destination', and 'departure_date'. Example: \
         {\"origin\": \"Mumbai\", \"destination\": \"Goa\", \
         \"departure_date\": \"2025-10-15\"}"
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let args: FlightSearchArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => return Ok(flight_input_error(&e.to_string())),
        };

        let departure_airport = match resolve_airport_code(&args.origin) {
            Some(code) => code,
            None => return Ok(unresolved_place(&args.origin)),
        };
        let arrival_airport = match resolve_airport_code(&args.destination) {
            Some(code) => code,
            None => return Ok(unresolved_place(&args.destination)),
        };

        if NaiveDate::parse_from_str(&args.departure_date, "%Y-%m-%d").is_err() {
            return Ok(flight_input_error(&format!(
                "invalid departure_date '{}'",
                args.departure_date
            )));
        }

        let api_key = match &self.api_key {
            Some(key) => key,
            None => {
                return Err(anyhow::anyhow!(
                    "flight search is not configured: set RAPIDAPI_KEY"
                ))
            }
        };

        tracing::info!(
            origin = %args.origin,
            destination = %args.destination,
            date = %args.departure_date,
            route = %format!("{}-{}", departure_airport, arrival_airport),
            "searching flights"
        );

        let response = self
            .client
            .get(FLIGHTS_ENDPOINT)
            .query(&[
                ("departure_airport_code", departure_airport.as_str()),
                ("arrival_airport_code", arrival_airport.as_str()),
                ("date", args.departure_date.as_str()),
                ("currency", CURRENCY),
            ])
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", FLIGHTS_HOST)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => return Ok(format!("API request failed: {}", e)),
        };

        let status = response.status();
        if !status.is_success() {
            return Ok(format!(
                "API request failed: status {} from {}",
                status, FLIGHTS_HOST
            ));
        }

        let data: Value = match response.json().await {
            Ok(data) => data,
            Err(e) => return Ok(flight_input_error(&e.to_string())),
        };

        Ok(format_top_flights(
            &data,
            &args.origin,
            &args.destination,
            &args.departure_date,
        ))
    }
}

/// Maps a city name to its primary IATA airport code. Inputs that already
/// look like a 3-letter code pass through unchanged.
fn resolve_airport_code(place: &str) -> Option<String> {
    let trimmed = place.trim();
    if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_uppercase()) {
        return Some(trimmed.to_string());
    }

    let code = match trimmed.to_lowercase().as_str() {
        "mumbai" | "bombay" => "BOM",
        "goa" => "GOI",
        "delhi" | "new delhi" => "DEL",
        "bangalore" | "bengaluru" => "BLR",
        "chennai" => "MAA",
        "kolkata" => "CCU",
        "hyderabad" => "HYD",
        "pune" => "PNQ",
        "jaipur" => "JAI",
        "ahmedabad" => "AMD",
        "kochi" | "cochin" => "COK",
        "lucknow" => "LKO",
        "london" => "LHR",
        "paris" => "CDG",
        "new york" => "JFK",
        "dubai" => "DXB",
        "singapore" => "SIN",
        "bangkok" => "BKK",
        "tokyo" => "NRT",
        "sydney" => "SYD",
        "san francisco" => "SFO",
        "los angeles" => "LAX",
        _ => return None,
    };
    Some(code.to_string())
}

/// Renders the provider's `data.topFlights` list into a short text summary,
/// or a descriptive "no flights" message when the structure is absent.
fn format_top_flights(data: &Value, origin: &str, destination: &str, date: &str) -> String {
    let top_flights = data
        .get("data")
        .and_then(|d| d.get("topFlights"))
        .and_then(Value::as_array)
        .filter(|flights| !flights.is_empty());

    let top_flights = match top_flights {
        Some(flights) => flights,
        None => {
            return format!(
                "No flights found from {} to {} on {}.",
                origin, destination, date
            )
        }
    };

    let formatted: Vec<String> = top_flights
        .iter()
        .take(MAX_RESULTS)
        .map(|flight| {
            let airline = flight
                .get("flights")
                .and_then(|legs| legs.get(0))
                .and_then(|leg| leg.get("airline"));
            format!(
                "- Airline: {}, Price: ${}, Duration: {}, Stops: {}",
                display_field(airline),
                display_field(flight.get("price")),
                display_field(flight.get("duration").and_then(|d| d.get("text"))),
                display_field(flight.get("stops")),
            )
        })
        .collect();

    if formatted.is_empty() {
        return format!(
            "Could not parse flight information from {} to {}.",
            origin, destination
        );
    }

    format!("Here are the top flight options:\n{}", formatted.join("\n"))
}

/// Provider fields arrive as strings or numbers depending on the route.
fn display_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "N/A".to_string(),
    }
}

fn flight_input_error(detail: &str) -> String {
    format!(
        "An error occurred while searching for flights: {}. Please ensure the \
         input is a valid JSON and the date is in YYYY-MM-DD format.",
        detail
    )
}

fn unresolved_place(place: &str) -> String {
    format!(
        "Could not resolve an airport code for '{}'. Try a major city or a \
         3-letter IATA airport code.",
        place
    )
}
