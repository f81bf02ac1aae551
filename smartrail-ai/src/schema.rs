//! The fixed structured-output contract sent with every parsing request.

use chrono::Utc;
use serde_json::{json, Value};

pub const SYSTEM_INSTRUCTION: &str = "You are an AI for a smart railway booking system. \
Your goal is to understand user queries for train travel and provide structured data for \
available tickets and travel suggestions. Generate fictional but realistic train data with \
prices in INR. If the query is ambiguous, set isQueryValid to false and provide a helpful \
errorMessage.";

/// Response schema for the `generateContent` call. Only the validity flag is
/// required at the top level; ticket options carry all seven fields when
/// present. The date description embeds today's date so the model can resolve
/// relative phrases like "tomorrow" or "next Friday".
pub fn response_schema() -> Value {
    let today = Utc::now().date_naive();
    json!({
        "type": "OBJECT",
        "properties": {
            "isQueryValid": {
                "type": "BOOLEAN",
                "description": "True if the user query is a valid travel request that can be understood, false otherwise."
            },
            "errorMessage": {
                "type": "STRING",
                "description": "A user-friendly error message if the query is invalid, unclear, or nonsensical for train travel."
            },
            "parsedQuery": {
                "type": "OBJECT",
                "properties": {
                    "origin": { "type": "STRING", "description": "The departure city or station." },
                    "destination": { "type": "STRING", "description": "The arrival city or station." },
                    "date": {
                        "type": "STRING",
                        "description": format!("The travel date in YYYY-MM-DD format. Infer the date based on context like \"tomorrow\" or \"next Friday\". Assume today is {today}.")
                    },
                    "adults": { "type": "INTEGER", "description": "The number of adult passengers inferred from the query. Default to 1 if not specified." },
                    "children": { "type": "INTEGER", "description": "The number of child passengers inferred from the query. Default to 0 if not specified." }
                }
            },
            "ticketOptions": {
                "type": "ARRAY",
                "description": "A list of 3 to 5 fictional but realistic train ticket options that match the query.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING", "description": "A unique identifier for the ticket, e.g., \"SR-1234\"." },
                        "trainName": { "type": "STRING", "description": "A creative and appealing train name, e.g., \"The Midnight Express\" or \"Coastal Voyager\"." },
                        "departureTime": { "type": "STRING", "description": "Departure time in HH:MM format." },
                        "arrivalTime": { "type": "STRING", "description": "Arrival time in HH:MM format." },
                        "duration": { "type": "STRING", "description": "Total travel duration, e.g., \"3h 15m\"." },
                        "price": { "type": "NUMBER", "description": "The price per passenger in INR." },
                        "class": { "type": "STRING", "description": "The travel class. Should be one of \"Economy\", \"Business\", or \"First\"." }
                    },
                    "required": ["id", "trainName", "departureTime", "arrivalTime", "duration", "price", "class"]
                }
            },
            "smartSuggestions": {
                "type": "ARRAY",
                "description": "A list of 2-3 helpful, creative suggestions or alternative ideas for the user's trip. For example, suggest a scenic route, a cheaper but slightly longer journey, or an interesting stop along the way.",
                "items": { "type": "STRING" }
            }
        },
        "required": ["isQueryValid"]
    })
}
