//! Query parser client: delegates free-text travel queries to a generative
//! model with a fixed structured-output schema.

pub mod client;
pub mod error;
pub mod schema;

pub use client::{QueryParserClient, FALLBACK_MESSAGE};
pub use error::ParserError;
