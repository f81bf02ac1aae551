use std::collections::HashMap;

use smartrail_core::booking::Booking;
use smartrail_core::identity::User;

/// In-memory session and identity state: at most one signed-in user, plus a
/// name-keyed history of bookings for every name seen this session.
///
/// Histories are keyed by display name only. Two people sharing a name share
/// one history; that is an accepted simplification of this system.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<User>,
    bookings: HashMap<String, Vec<Booking>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in by display name. A blank name is rejected; any other name
    /// succeeds and, on first sight, gets an empty booking history.
    pub fn login(&mut self, name: &str) -> Option<User> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        let user = User::from_name(trimmed);
        self.bookings.entry(user.name.clone()).or_default();
        tracing::info!("User signed in: {}", user.name);
        self.current = Some(user.clone());
        Some(user)
    }

    /// Clear the current user. Their booking history stays in the store,
    /// orphaned until the same name signs in again.
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            tracing::info!("User signed out: {}", user.name);
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Prepend a booking to the named user's history.
    pub fn add_booking(&mut self, name: &str, booking: Booking) {
        let history = self.bookings.entry(name.to_string()).or_default();
        history.insert(0, booking);
    }

    /// The named user's bookings, newest-first by each booking's own date:
    /// trip date for long-distance tickets, booking date otherwise.
    pub fn bookings_for(&self, name: &str) -> Vec<Booking> {
        let mut history = self.bookings.get(name).cloned().unwrap_or_default();
        history.sort_by(|a, b| b.sort_date().cmp(&a.sort_date()));
        history
    }
}
