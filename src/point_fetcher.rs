use scraper::{Html, Selector};
use tracing::{debug, instrument};

use crate::config::StateTarget;
use crate::fetch_error::FetchError;
use crate::timestamp::ObservationTimestamp;

/// Fetches the per-date KML document for a state and extracts its raw
/// coordinate strings.
#[derive(Clone)]
pub struct PointFetcher {
    client: reqwest::Client,
    url: String,
}

impl PointFetcher {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    #[instrument(skip(self, target), fields(state = %target.code, date = %timestamp))]
    pub async fn fetch_points(
        &self,
        target: &StateTarget,
        timestamp: &ObservationTimestamp,
    ) -> Result<Vec<String>, FetchError> {
        let url = format!(
            "{}?date={}&state={}",
            self.url,
            timestamp.query_encoded(),
            encode_query_value(&target.display_name),
        );
        debug!("Sending HTTP request for point data");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        debug!("Received HTTP response with status: {}", status);

        if !status.is_success() {
            return Err(FetchError::DataStatus(status));
        }

        let body = response.text().await?;
        debug!("Retrieved document, size: {} bytes", body.len());

        Ok(extract_coordinates(&body))
    }
}

/// Spaces in query values are sent as a literal `%20`, matching what the
/// portal expects. Nothing else is escaped.
fn encode_query_value(value: &str) -> String {
    value.replace(' ', "%20")
}

/// Collect the trimmed text of every `coordinates` element, in document
/// order. A body with no such elements, including one that is not markup at
/// all, yields an empty list rather than an error; the caller still writes
/// the (empty) artifact.
pub fn extract_coordinates(body: &str) -> Vec<String> {
    let document = Html::parse_document(body);
    let selector = Selector::parse("coordinates").unwrap();

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect()
}
