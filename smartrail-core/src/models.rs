use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Travel class as emitted by the parsing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelClass {
    Economy,
    Business,
    First,
}

/// One fabricated candidate itinerary. The service invents these per query;
/// beyond required-field presence nothing about them is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketOption {
    pub id: String,
    pub train_name: String,
    /// Display string, HH:MM.
    pub departure_time: String,
    /// Display string, HH:MM.
    pub arrival_time: String,
    /// Display string, e.g. "3h 15m".
    pub duration: String,
    /// Per-passenger price (currency-agnostic unit, INR by convention).
    pub price: f64,
    pub class: TravelClass,
}

impl TicketOption {
    /// Total displayed price for a party: per-passenger price times headcount.
    pub fn total_price(&self, adults: u32, children: u32) -> f64 {
        self.price * f64::from(adults + children)
    }
}

/// Structured trip request derived from free text by the parsing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelQuery {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
}

impl TravelQuery {
    /// The service may omit passenger counts entirely (or emit zero adults,
    /// which the schema treats the same way). Adults default to 1, children
    /// to 0.
    pub fn normalize_passengers(&mut self) {
        if self.adults == 0 {
            self.adults = 1;
        }
    }

    pub fn total_passengers(&self) -> u32 {
        self.adults + self.children
    }
}

/// Envelope returned by the query parser. If `is_query_valid` is true a
/// `parsed_query` is expected; absent option/suggestion arrays render as
/// empty lists downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub is_query_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed_query: Option<TravelQuery>,
    #[serde(default)]
    pub ticket_options: Vec<TicketOption>,
    #[serde(default)]
    pub smart_suggestions: Vec<String>,
}

impl QueryResponse {
    /// An invalid-query response carrying a user-facing message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_query_valid: false,
            error_message: Some(message.into()),
            parsed_query: None,
            ticket_options: Vec::new(),
            smart_suggestions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_arrays_deserialize_empty() {
        let raw = r#"{
            "isQueryValid": true,
            "parsedQuery": {
                "origin": "Mumbai CSMT",
                "destination": "New Delhi (NDLS)",
                "date": "2026-09-14"
            }
        }"#;
        let resp: QueryResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.is_query_valid);
        assert!(resp.ticket_options.is_empty());
        assert!(resp.smart_suggestions.is_empty());

        let mut query = resp.parsed_query.unwrap();
        assert_eq!(query.adults, 0);
        query.normalize_passengers();
        assert_eq!(query.adults, 1);
        assert_eq!(query.children, 0);
    }

    #[test]
    fn test_ticket_option_wire_names() {
        let raw = r#"{
            "id": "SR-1234",
            "trainName": "Coastal Voyager",
            "departureTime": "08:15",
            "arrivalTime": "13:40",
            "duration": "5h 25m",
            "price": 950.0,
            "class": "Business"
        }"#;
        let ticket: TicketOption = serde_json::from_str(raw).unwrap();
        assert_eq!(ticket.train_name, "Coastal Voyager");
        assert_eq!(ticket.class, TravelClass::Business);
    }

    #[test]
    fn test_total_price_is_per_passenger_times_headcount() {
        let ticket = TicketOption {
            id: "SR-1".into(),
            train_name: "The Midnight Express".into(),
            departure_time: "22:00".into(),
            arrival_time: "06:30".into(),
            duration: "8h 30m".into(),
            price: 450.50,
            class: TravelClass::Economy,
        };
        assert_eq!(ticket.total_price(2, 1), 1351.5);
        assert_eq!(ticket.total_price(1, 0), 450.50);
    }
}
