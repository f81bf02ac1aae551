//! Booking flows: the long-distance purchase state machine and the simpler
//! local-ticket (platform, season) quote/confirm flow.

pub mod local;
pub mod machine;

pub use local::{PlatformQuote, SeasonQuote};
pub use machine::{BookingFlow, BookingStep, FlowError, PendingAction};
