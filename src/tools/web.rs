//! General web search via the Google Custom Search JSON API.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use super::Tool;

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Number of results requested per search.
const RESULT_COUNT: u8 = 10;

/// Searches the web through a programmable search engine. Requires both a
/// `GOOGLE_API_KEY` and the `GOOGLE_CSE_ID` of the engine to query.
pub struct WebSearch {
    api_key: Option<String>,
    cse_id: Option<String>,
    client: reqwest::Client,
}

impl WebSearch {
    pub fn new(api_key: Option<String>, cse_id: Option<String>) -> Self {
        Self {
            api_key,
            cse_id,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Tool for WebSearch {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Searches the web for a single, specific query to get information using \
         Google Search. Only use this for one search at a time. For example, you \
         can search for 'best beaches in Goa' or 'seafood restaurants in \
         Calangute', but not both at once."
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        let query = extract_query(&args)
            .ok_or_else(|| anyhow::anyhow!("Missing 'query' argument"))?;

        let (api_key, cse_id) = match (&self.api_key, &self.cse_id) {
            (Some(key), Some(id)) => (key, id),
            _ => {
                return Err(anyhow::anyhow!(
                    "web search is not configured: set GOOGLE_API_KEY and GOOGLE_CSE_ID"
                ))
            }
        };

        tracing::info!(query, "performing Google search");

        let num = RESULT_COUNT.to_string();
        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&[
                ("key", api_key.as_str()),
                ("cx", cse_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "search provider returned status {}: {}",
                status,
                body
            ));
        }

        let results: SearchResponse = response.json().await?;
        Ok(summarize(&results))
    }
}

/// The action input is either a bare query string or an object with a
/// `query` key, depending on how the model chose to format it.
fn extract_query(args: &Value) -> Option<&str> {
    args.as_str()
        .or_else(|| args.get("query").and_then(Value::as_str))
        .map(str::trim)
        .filter(|q| !q.is_empty())
}

/// Joins result snippets into a single text summary for the observation.
fn summarize(results: &SearchResponse) -> String {
    let snippets: Vec<&str> = results
        .items
        .iter()
        .filter_map(|item| item.snippet.as_deref())
        .collect();

    if snippets.is_empty() {
        "No good Google Search Result was found".to_string()
    } else {
        snippets.join(" ")
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    snippet: Option<String>,
}
