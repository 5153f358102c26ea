//! The board's fetch and mutation cycle, independent of the DOM.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these with `HttpApi` and apply the returned outcome to
//! their signals: show the status, clear the input, and trigger exactly one
//! reload after a successful mutation. Tests drive the same functions against
//! an in-memory API.
//!
//! ERROR HANDLING
//! ==============
//! No failure is retried. Rejections show the server's `detail` verbatim when
//! present; transport and decode failures show a fixed message.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::error::ApiError;
use crate::net::api::CapabilityApi;
use crate::net::types::CapabilitySet;
use crate::state::board::BoardState;
use crate::state::status::{StatusBoard, StatusMessage};

pub const REGISTER_OK: &str = "Registration successful!";
pub const REGISTER_REJECTED: &str = "Registration failed.";
pub const REGISTER_TRANSPORT: &str = "An error occurred.";
pub const UNREGISTER_OK: &str = "Unregistration successful!";
pub const UNREGISTER_REJECTED: &str = "An error occurred";
pub const UNREGISTER_TRANSPORT: &str = "Failed to unregister. Please try again.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

/// What the board does after a register/unregister attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub status: StatusMessage,
    /// Re-fetch the listing once.
    pub reload: bool,
    /// Empty the card's email input.
    pub clear_input: bool,
}

impl ActionOutcome {
    fn succeeded(text: String, clear_input: bool) -> Self {
        Self { status: StatusMessage::success(text), reload: true, clear_input }
    }

    fn failed(text: impl Into<String>) -> Self {
        Self { status: StatusMessage::error(text), reload: false, clear_input: false }
    }
}

/// Follow-up work left after an outcome has been recorded in state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedOutcome {
    /// Token for the slot's auto-hide.
    pub hide_token: u64,
    pub clear_input: bool,
    /// Ticket of the one listing fetch to issue, if the action succeeded.
    pub reload_ticket: Option<u64>,
}

/// Show the outcome in `capability`'s slot and take a reload ticket when asked.
///
/// Taking the ticket does not touch the rendered listing; only
/// [`apply_listing`] does.
pub fn apply_outcome(
    outcome: ActionOutcome,
    capability: &str,
    statuses: &mut StatusBoard,
    board: &mut BoardState,
) -> AppliedOutcome {
    let ActionOutcome { status, reload, clear_input } = outcome;
    let hide_token = statuses.show(capability, status);
    let reload_ticket = reload.then(|| board.begin_load());
    AppliedOutcome { hide_token, clear_input, reload_ticket }
}

/// Apply the listing fetched with `ticket` and drop idle slots of capabilities
/// that are gone. Returns `false` when the response was superseded.
pub fn apply_listing(
    ticket: u64,
    result: Result<CapabilitySet, ApiError>,
    board: &mut BoardState,
    statuses: &mut StatusBoard,
) -> bool {
    if !board.finish_load(ticket, result) {
        return false;
    }
    if let Some(set) = board.capabilities() {
        statuses.prune(set.names());
    }
    true
}

/// Fetch the listing, logging failures.
///
/// # Errors
///
/// Passes through any [`ApiError`] from the listing call.
pub async fn load<A: CapabilityApi>(api: &A) -> Result<CapabilitySet, ApiError> {
    match api.list().await {
        Ok(set) => {
            log::debug!("loaded {} capabilities", set.len());
            Ok(set)
        }
        Err(e) => {
            log::error!("Error fetching capabilities: {e}");
            Err(e)
        }
    }
}

/// Register `raw_email` for `capability`.
///
/// Invalid input never reaches the network.
pub async fn register<A: CapabilityApi>(api: &A, capability: &str, raw_email: &str) -> ActionOutcome {
    let Ok(email) = validate_email_input(raw_email) else {
        return ActionOutcome::failed(INVALID_EMAIL);
    };
    match api.register(capability, &email).await {
        Ok(reply) => {
            log::info!("registered {email} for {capability}");
            ActionOutcome::succeeded(reply.message.unwrap_or_else(|| REGISTER_OK.to_owned()), true)
        }
        Err(e) if e.is_rejection() => {
            log::warn!("registration for {capability}: {e}");
            ActionOutcome::failed(e.detail().unwrap_or(REGISTER_REJECTED))
        }
        Err(e) => {
            log::error!("Error registering for {capability}: {e}");
            ActionOutcome::failed(REGISTER_TRANSPORT)
        }
    }
}

/// Remove `email` from `capability`.
pub async fn unregister<A: CapabilityApi>(api: &A, capability: &str, email: &str) -> ActionOutcome {
    match api.unregister(capability, email).await {
        Ok(reply) => {
            log::info!("unregistered {email} from {capability}");
            ActionOutcome::succeeded(reply.message.unwrap_or_else(|| UNREGISTER_OK.to_owned()), false)
        }
        Err(e) if e.is_rejection() => {
            log::warn!("unregistration from {capability}: {e}");
            ActionOutcome::failed(e.detail().unwrap_or(UNREGISTER_REJECTED))
        }
        Err(e) => {
            log::error!("Error unregistering: {e}");
            ActionOutcome::failed(UNREGISTER_TRANSPORT)
        }
    }
}

/// Trim and check an email against the HTML `type="email"` grammar.
///
/// # Errors
///
/// Returns [`INVALID_EMAIL`] when the value is empty or malformed.
pub fn validate_email_input(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(INVALID_EMAIL);
    };
    if local.is_empty() || !local.chars().all(is_local_char) {
        return Err(INVALID_EMAIL);
    }
    if domain.is_empty() || !domain.split('.').all(is_domain_label) {
        return Err(INVALID_EMAIL);
    }
    Ok(email.to_owned())
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= 63
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}
