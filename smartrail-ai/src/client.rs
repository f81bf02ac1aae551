use reqwest::{Client, StatusCode};
use serde_json::json;
use smartrail_core::models::QueryResponse;

use crate::error::ParserError;
use crate::schema;

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// The message shown whenever the parsing call cannot produce a usable
/// response, whatever the underlying cause.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I encountered an issue planning your trip. Please try again.";

/// Client for the external query-parsing model. One attempt per call, no
/// retries, no timeout.
#[derive(Clone)]
pub struct QueryParserClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl QueryParserClient {
    /// Create a client with the API key from `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self, ParserError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| ParserError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Parse a free-text travel query into a structured response.
    ///
    /// Never fails outward: any transport, status, or payload problem is
    /// logged at this boundary and collapsed into an invalid-query response
    /// carrying the generic apology.
    pub async fn parse_trip_query(&self, query: &str) -> QueryResponse {
        match self.request_structured(query).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("Trip query parsing failed: {}", err);
                QueryResponse::invalid(FALLBACK_MESSAGE)
            }
        }
    }

    async fn request_structured(&self, query: &str) -> Result<QueryResponse, ParserError> {
        let body = json!({
            "contents": [{
                "parts": [{
                    "text": format!("Parse the following user request for train tickets: \"{query}\".")
                }]
            }],
            "systemInstruction": {
                "parts": [{ "text": schema::SYSTEM_INSTRUCTION }]
            },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema::response_schema()
            }
        });

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.api_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ParserError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {}
            status => {
                let message = response.text().await.unwrap_or_default();
                return Err(ParserError::ApiError {
                    status: status.as_u16(),
                    message,
                });
            }
        }

        let envelope: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ParserError::InvalidPayload(e.to_string()))?;

        let text = envelope["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| ParserError::InvalidPayload("no text part in model response".into()))?;

        let payload: serde_json::Value = serde_json::from_str(text.trim())
            .map_err(|e| ParserError::InvalidPayload(e.to_string()))?;

        // The validity flag is the one mandatory field; without it the
        // payload is unusable regardless of what else it contains.
        if !payload["isQueryValid"].is_boolean() {
            return Err(ParserError::InvalidPayload(
                "missing isQueryValid flag".into(),
            ));
        }

        let mut result: QueryResponse =
            serde_json::from_value(payload).map_err(|e| ParserError::InvalidPayload(e.to_string()))?;

        if result.is_query_valid {
            if let Some(parsed) = result.parsed_query.as_mut() {
                parsed.normalize_passengers();
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn model_envelope(inner: serde_json::Value) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": inner.to_string() }] }
            }]
        })
    }

    async fn client_for(server: &MockServer) -> QueryParserClient {
        QueryParserClient::new("test-key".into()).with_api_url(server.uri())
    }

    #[tokio::test]
    async fn test_successful_parse_applies_passenger_defaults() {
        let server = MockServer::start().await;
        let inner = json!({
            "isQueryValid": true,
            "parsedQuery": {
                "origin": "Mumbai CSMT",
                "destination": "New Delhi (NDLS)",
                "date": "2026-09-14"
            },
            "ticketOptions": [],
            "smartSuggestions": ["Take the scenic Konkan route"]
        });
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(model_envelope(inner)))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client.parse_trip_query("from Mumbai CSMT to New Delhi (NDLS)").await;

        assert!(response.is_query_valid);
        let query = response.parsed_query.unwrap();
        assert_eq!(query.adults, 1);
        assert_eq!(query.children, 0);
        assert_eq!(response.smart_suggestions.len(), 1);
    }

    #[tokio::test]
    async fn test_server_error_collapses_to_apology() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client.parse_trip_query("delhi to mumbai").await;

        assert!(!response.is_query_valid);
        assert_eq!(response.error_message.as_deref(), Some(FALLBACK_MESSAGE));
    }

    #[tokio::test]
    async fn test_non_json_text_collapses_to_apology() {
        let server = MockServer::start().await;
        let envelope = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "I cannot help with that." }] }
            }]
        });
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client.parse_trip_query("gibberish").await;

        assert!(!response.is_query_valid);
        assert_eq!(response.error_message.as_deref(), Some(FALLBACK_MESSAGE));
    }

    #[tokio::test]
    async fn test_missing_validity_flag_collapses_to_apology() {
        let server = MockServer::start().await;
        let inner = json!({ "ticketOptions": [] });
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(model_envelope(inner)))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client.parse_trip_query("from A to B").await;

        assert!(!response.is_query_valid);
        assert_eq!(response.error_message.as_deref(), Some(FALLBACK_MESSAGE));
    }

    #[tokio::test]
    async fn test_invalid_query_verdict_passes_through() {
        let server = MockServer::start().await;
        let inner = json!({
            "isQueryValid": false,
            "errorMessage": "I couldn't tell where you want to go."
        });
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(model_envelope(inner)))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client.parse_trip_query("somewhere nice").await;

        assert!(!response.is_query_valid);
        assert_eq!(
            response.error_message.as_deref(),
            Some("I couldn't tell where you want to go.")
        );
    }
}
