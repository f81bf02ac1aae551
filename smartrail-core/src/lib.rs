pub mod booking;
pub mod identity;
pub mod models;
pub mod stations;

pub use booking::Booking;
pub use models::{QueryResponse, TicketOption, TravelClass, TravelQuery};
