use std::sync::Arc;

use smartrail_ai::QueryParserClient;
use smartrail_booking::BookingFlow;
use smartrail_core::identity::{CredentialVerifier, OpenVerifier};
use smartrail_core::models::{TicketOption, TravelQuery};
use smartrail_store::{ResultCache, SessionStore};
use tokio::sync::RwLock;

/// Results-view state: the active parsed query, the ticket options returned
/// for it, and the user-adjustable passenger counts.
#[derive(Debug, Clone)]
pub struct TripContext {
    pub query: TravelQuery,
    pub ticket_options: Vec<TicketOption>,
    pub adults: u32,
    pub children: u32,
}

impl TripContext {
    pub fn from_query(query: TravelQuery, ticket_options: Vec<TicketOption>) -> Self {
        let adults = query.adults;
        let children = query.children;
        Self {
            query,
            ticket_options,
            adults,
            children,
        }
    }
}

/// Process-wide application state. Everything lives in memory and resets
/// with the process; all mutation happens under the locks.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<SessionStore>>,
    pub cache: Arc<RwLock<ResultCache>>,
    pub flow: Arc<RwLock<BookingFlow>>,
    pub trip: Arc<RwLock<Option<TripContext>>>,
    pub parser: Arc<QueryParserClient>,
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    pub fn new(parser: QueryParserClient) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(SessionStore::new())),
            cache: Arc::new(RwLock::new(ResultCache::new())),
            flow: Arc::new(RwLock::new(BookingFlow::new())),
            trip: Arc::new(RwLock::new(None)),
            parser: Arc::new(parser),
            verifier: Arc::new(OpenVerifier),
        }
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = verifier;
        self
    }
}
