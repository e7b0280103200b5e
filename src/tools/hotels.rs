//! Hotel lookup for a destination and date range.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::Tool;

/// Finds hotel options for a stay. Currently returns static placeholder
/// results until a hotel provider is wired up; the argument contract and
/// error behavior are what a real integration would keep.
pub struct HotelSearch;

#[derive(Debug, Deserialize)]
struct HotelSearchArgs {
    destination: String,
    check_in_date: String,
    check_out_date: String,
}

#[async_trait]
impl Tool for HotelSearch {
    fn name(&self) -> &str {
        "search_hotels"
    }

    fn description(&self) -> &str {
        "Finds hotels for a given destination and dates. The input must be a \
         JSON object with the keys 'destination', 'check_in_date', and \
         'check_out_date'."
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let args: HotelSearchArgs = match serde_json::from_value(args) {
            Ok(args) => args,
            Err(e) => {
                return Ok(format!(
                    "Error processing hotel search: {}. Please ensure the input is \
                     a valid JSON with 'destination', 'check_in_date', and \
                     'check_out_date' keys.",
                    e
                ))
            }
        };

        tracing::info!(
            destination = %args.destination,
            check_in = %args.check_in_date,
            check_out = %args.check_out_date,
            "searching hotels"
        );

        Ok(format!(
            "Found 3 hotels in {}: 1. The Grand Hotel (₹8000/night, 4.5 stars), \
             2. City Inn (₹4500/night, 4.0 stars), 3. Budget Stay (₹2500/night, \
             3.5 stars).",
            args.destination
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lists_hotels_for_the_destination() {
        let out = tokio_test::block_on(HotelSearch.execute(json!({
            "destination": "Goa",
            "check_in_date": "2025-10-15",
            "check_out_date": "2025-10-18"
        })))
        .unwrap();
        assert!(out.starts_with("Found 3 hotels in Goa:"));
        assert!(out.contains("The Grand Hotel"));
    }

    #[test]
    fn missing_keys_produce_a_corrective_observation() {
        let out = tokio_test::block_on(HotelSearch.execute(json!({
            "destination": "Goa"
        })))
        .unwrap();
        assert!(out.starts_with("Error processing hotel search:"));
        assert!(out.contains("'check_in_date'"));
    }

    #[test]
    fn bare_string_input_produces_a_corrective_observation() {
        let out =
            tokio_test::block_on(HotelSearch.execute(json!("hotels in Goa please"))).unwrap();
        assert!(out.starts_with("Error processing hotel search:"));
    }
}
