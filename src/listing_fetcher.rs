use scraper::{Html, Selector};
use tracing::{debug, error, instrument};

use crate::config::StateTarget;
use crate::fetch_error::FetchError;
use crate::timestamp::ObservationTimestamp;

/// Fetches the per-state index page and extracts the available observation
/// timestamps from it.
#[derive(Clone)]
pub struct ListingFetcher {
    client: reqwest::Client,
    url: String,
}

impl ListingFetcher {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    #[instrument(skip(self, target), fields(url = %self.url, state = %target.code))]
    pub async fn fetch_timestamps(
        &self,
        target: &StateTarget,
    ) -> Result<Vec<ObservationTimestamp>, FetchError> {
        let url = format!("{}?q={}", self.url, target.code);
        debug!("Sending HTTP request for state listing");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        debug!("Received HTTP response with status: {}", status);

        if !status.is_success() {
            error!("Listing request for state {} failed: {}", target.code, status);
            return Err(FetchError::ListingStatus(status));
        }

        let html = response.text().await?;
        debug!("Retrieved HTML content, size: {} bytes", html.len());

        parse_listing(&html, &target.listing_section)
    }
}

/// Extract observation timestamps from a listing page: the trimmed text of
/// every span under the div with the given id. A missing div means the layer
/// has no listing on this page (or the portal changed its markup) and the
/// whole state is aborted rather than returning partial results.
pub fn parse_listing(
    html: &str,
    section_id: &str,
) -> Result<Vec<ObservationTimestamp>, FetchError> {
    let document = Html::parse_document(html);
    let section_selector = Selector::parse(&format!("div#{section_id}"))
        .map_err(|_| FetchError::SectionNotFound(section_id.to_string()))?;
    let span_selector = Selector::parse("span").unwrap();

    let section = document.select(&section_selector).next().ok_or_else(|| {
        error!("Listing section '{}' not found in page", section_id);
        FetchError::SectionNotFound(section_id.to_string())
    })?;

    let timestamps: Vec<ObservationTimestamp> = section
        .select(&span_selector)
        .map(|span| ObservationTimestamp::new(span.text().collect::<String>().trim()))
        .collect();

    debug!("Found {} timestamps in listing section", timestamps.len());
    Ok(timestamps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_listing_collects_span_texts_in_order() {
        let html = r#"
            <html><body>
            <div id="minuslevel901">
                <span>2024-01-05 10:00:00</span>
                <span>2024-01-05 10:05:00</span>
            </div>
            </body></html>
        "#;

        let timestamps = parse_listing(html, "minuslevel901").unwrap();
        assert_eq!(timestamps.len(), 2);
        assert_eq!(timestamps[0].as_str(), "2024-01-05 10:00:00");
        assert_eq!(timestamps[1].as_str(), "2024-01-05 10:05:00");
    }

    #[test]
    fn test_parse_listing_trims_whitespace() {
        let html = r#"
            <div id="minuslevel31">
                <span>
                    2024-01-05 10:00:00
                </span>
            </div>
        "#;

        let timestamps = parse_listing(html, "minuslevel31").unwrap();
        assert_eq!(timestamps.len(), 1);
        assert_eq!(timestamps[0].as_str(), "2024-01-05 10:00:00");
    }

    #[test]
    fn test_parse_listing_ignores_spans_outside_section() {
        let html = r#"
            <div id="other"><span>not a date</span></div>
            <div id="minuslevel901">
                <span>2024-01-05 10:00:00</span>
            </div>
        "#;

        let timestamps = parse_listing(html, "minuslevel901").unwrap();
        assert_eq!(timestamps.len(), 1);
        assert_eq!(timestamps[0].as_str(), "2024-01-05 10:00:00");
    }

    #[test]
    fn test_parse_listing_nested_spans() {
        let html = r#"
            <div id="minuslevel901">
                <ul><li><span>2024-01-05 10:00:00</span></li></ul>
            </div>
        "#;

        let timestamps = parse_listing(html, "minuslevel901").unwrap();
        assert_eq!(timestamps.len(), 1);
    }

    #[test]
    fn test_parse_listing_empty_section_yields_no_timestamps() {
        let html = r#"<div id="minuslevel901"></div>"#;

        let timestamps = parse_listing(html, "minuslevel901").unwrap();
        assert!(timestamps.is_empty());
    }

    #[test]
    fn test_parse_listing_missing_section_is_an_error() {
        let html = r#"<div id="somethingelse"><span>2024-01-05 10:00:00</span></div>"#;

        let result = parse_listing(html, "minuslevel901");
        assert!(matches!(result, Err(FetchError::SectionNotFound(id)) if id == "minuslevel901"));
    }
}
