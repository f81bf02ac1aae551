use serde::{Deserialize, Serialize};
use smartrail_core::models::TicketOption;

/// Step of the long-distance purchase flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    #[default]
    Idle,
    Options,
    Payment,
    Confirmed,
}

/// An intent interrupted by the login prompt, remembered so it can resume
/// once the user has signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingAction {
    /// Book the currently selected long-distance ticket.
    Book,
    Platform,
    Season,
}

/// Outcome of a book-now request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookNowOutcome {
    /// Flow entered the options step.
    Options,
    /// No authenticated session; the intent is remembered for after login.
    LoginRequired,
}

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("No ticket selected")]
    NoTicketSelected,

    #[error("Invalid booking transition from {from:?} to {to:?}")]
    InvalidTransition { from: BookingStep, to: BookingStep },
}

/// Drives the long-distance purchase flow:
///
/// ```text
/// Idle -> Options -> Payment -> Confirmed
///            |                     ^
///            +---------------------+   (sample-booking shortcut)
/// ```
///
/// `Payment -> Options` is back navigation. `Confirmed` is terminal for the
/// attempt; closing returns to `Idle` and clears the selected ticket. Entry
/// into `Options` requires an authenticated session; when it is missing, the
/// intent is parked as a [`PendingAction`] and resumed after login.
#[derive(Debug, Default)]
pub struct BookingFlow {
    step: BookingStep,
    selected: Option<TicketOption>,
    pending: Option<PendingAction>,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn selected_ticket(&self) -> Option<&TicketOption> {
        self.selected.as_ref()
    }

    pub fn pending_action(&self) -> Option<PendingAction> {
        self.pending
    }

    /// Toggle selection: picking the already-selected ticket deselects it.
    pub fn select_ticket(&mut self, ticket: TicketOption) -> Option<&TicketOption> {
        if self.selected.as_ref().map(|t| t.id.as_str()) == Some(ticket.id.as_str()) {
            self.selected = None;
        } else {
            self.selected = Some(ticket);
        }
        self.selected.as_ref()
    }

    /// Drop any selection, e.g. when a new search replaces the results.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn book_now(&mut self, authenticated: bool) -> Result<BookNowOutcome, FlowError> {
        if self.selected.is_none() {
            return Err(FlowError::NoTicketSelected);
        }
        if !authenticated {
            self.pending = Some(PendingAction::Book);
            return Ok(BookNowOutcome::LoginRequired);
        }
        self.step = BookingStep::Options;
        Ok(BookNowOutcome::Options)
    }

    /// Park a local-ticket intent behind the login prompt.
    pub fn remember_pending(&mut self, action: PendingAction) {
        self.pending = Some(action);
    }

    /// Consume the parked intent after a successful login. A parked booking
    /// intent re-enters `Options` automatically, provided the ticket is still
    /// selected; local-ticket intents are handed back to the caller to open
    /// the corresponding flow.
    pub fn resume_after_login(&mut self) -> Option<PendingAction> {
        let action = self.pending.take()?;
        match action {
            PendingAction::Book => {
                if self.selected.is_some() {
                    self.step = BookingStep::Options;
                    Some(PendingAction::Book)
                } else {
                    None
                }
            }
            other => Some(other),
        }
    }

    /// Transition: Options -> Payment.
    pub fn proceed_to_payment(&mut self) -> Result<(), FlowError> {
        if self.step != BookingStep::Options {
            return Err(FlowError::InvalidTransition {
                from: self.step,
                to: BookingStep::Payment,
            });
        }
        self.step = BookingStep::Payment;
        Ok(())
    }

    /// Back navigation: Payment -> Options.
    pub fn back_to_options(&mut self) -> Result<(), FlowError> {
        if self.step != BookingStep::Payment {
            return Err(FlowError::InvalidTransition {
                from: self.step,
                to: BookingStep::Options,
            });
        }
        self.step = BookingStep::Options;
        Ok(())
    }

    /// Confirm the purchase. Reachable from `Payment` and, via the
    /// sample-booking shortcut, directly from `Options`. Returns the
    /// confirmed ticket.
    pub fn confirm(&mut self) -> Result<TicketOption, FlowError> {
        if !matches!(self.step, BookingStep::Options | BookingStep::Payment) {
            return Err(FlowError::InvalidTransition {
                from: self.step,
                to: BookingStep::Confirmed,
            });
        }
        let ticket = self.selected.clone().ok_or(FlowError::NoTicketSelected)?;
        self.step = BookingStep::Confirmed;
        tracing::info!("Booking confirmed for ticket {}", ticket.id);
        Ok(ticket)
    }

    /// Close the flow: back to `Idle`, selection cleared.
    pub fn close(&mut self) {
        self.step = BookingStep::Idle;
        self.selected = None;
    }

    /// Full reset, including any parked intent. Used on logout and when the
    /// user navigates back to a fresh search.
    pub fn reset(&mut self) {
        self.close();
        self.pending = None;
    }
}
