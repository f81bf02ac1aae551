use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{TicketOption, TravelQuery};

/// A confirmed purchase record. Tagged on `ticketType` to match the wire
/// shape consumed by the profile views; immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "ticketType")]
pub enum Booking {
    #[serde(rename = "long-distance", rename_all = "camelCase")]
    LongDistance {
        booking_id: String,
        ticket_info: TicketOption,
        /// Parsed query with the final passenger counts at confirmation time.
        query_info: TravelQuery,
    },
    #[serde(rename = "platform", rename_all = "camelCase")]
    Platform {
        booking_id: String,
        station_name: String,
        platform_number: String,
        people_count: u32,
        price: f64,
        booking_date: DateTime<Utc>,
    },
    #[serde(rename = "season", rename_all = "camelCase")]
    Season {
        booking_id: String,
        from_station: String,
        to_station: String,
        people_count: u32,
        duration_days: i64,
        price: f64,
        booking_date: DateTime<Utc>,
        expiry_date: DateTime<Utc>,
    },
}

impl Booking {
    pub fn long_distance(ticket_info: TicketOption, query_info: TravelQuery) -> Self {
        Self::LongDistance {
            booking_id: generate_booking_id("SR"),
            ticket_info,
            query_info,
        }
    }

    pub fn platform(
        station_name: String,
        platform_number: String,
        people_count: u32,
        price: f64,
    ) -> Self {
        Self::Platform {
            booking_id: generate_booking_id("PLT"),
            station_name,
            platform_number,
            people_count,
            price,
            booking_date: Utc::now(),
        }
    }

    pub fn season(
        from_station: String,
        to_station: String,
        people_count: u32,
        duration_days: i64,
        price: f64,
    ) -> Self {
        let booking_date = Utc::now();
        Self::Season {
            booking_id: generate_booking_id("SEA"),
            from_station,
            to_station,
            people_count,
            duration_days,
            price,
            booking_date,
            expiry_date: booking_date + Duration::days(duration_days),
        }
    }

    pub fn booking_id(&self) -> &str {
        match self {
            Self::LongDistance { booking_id, .. }
            | Self::Platform { booking_id, .. }
            | Self::Season { booking_id, .. } => booking_id,
        }
    }

    /// The date a booking list is ordered by: the trip date for long-distance
    /// tickets, the booking date for platform and season tickets.
    pub fn sort_date(&self) -> DateTime<Utc> {
        match self {
            Self::LongDistance { query_info, .. } => {
                query_info.date.and_time(NaiveTime::MIN).and_utc()
            }
            Self::Platform { booking_date, .. } | Self::Season { booking_date, .. } => {
                *booking_date
            }
        }
    }
}

/// Type-prefixed id minted at confirmation time. Millisecond resolution, so
/// two confirmations within the same millisecond would collide; accepted
/// behavior for this system.
fn generate_booking_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Utc::now().timestamp_millis())
}
