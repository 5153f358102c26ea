//! Pure projection of the listing into display-ready cards.
//!
//! Components render `BoardView` as-is; every label the user reads is
//! produced here so it can be checked without a DOM.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::net::types::{Capability, CapabilityDetails};
use crate::state::board::LoadState;

pub const LOADING_TEXT: &str = "Loading capabilities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load capabilities. Please try again later.";
pub const NO_CONSULTANTS_TEXT: &str = "No consultants registered yet";
pub const VERTICALS_PLACEHOLDER: &str = "Not specified";
pub const EMAIL_PLACEHOLDER: &str = "your-email@slalom.com";

/// What the list container shows.
#[derive(Clone, Debug, PartialEq)]
pub enum BoardView {
    Loading,
    Failed,
    Cards(Vec<CardView>),
}

/// One rendered capability card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub practice_area: String,
    pub industry_verticals: String,
    /// e.g. `"10 hours/week available"`.
    pub capacity: String,
    /// e.g. `"1 consultants"`.
    pub team_size: String,
    pub consultants: Vec<ConsultantView>,
    /// DOM id of the card's email input.
    pub email_input_id: String,
}

/// A listed consultant with the target of its delete control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsultantView {
    pub capability: String,
    pub email: String,
}

pub fn render_board(load: &LoadState) -> BoardView {
    match load {
        LoadState::Loading => BoardView::Loading,
        LoadState::Failed => BoardView::Failed,
        LoadState::Loaded(set) => BoardView::Cards(set.iter().map(render_card).collect()),
    }
}

pub fn render_card(capability: &Capability) -> CardView {
    let Capability { name, details } = capability;
    CardView {
        name: name.clone(),
        description: details.description.clone(),
        practice_area: details.practice_area.clone(),
        industry_verticals: verticals_label(details),
        capacity: capacity_label(details.capacity_or_zero()),
        team_size: team_size_label(details.consultants.len()),
        consultants: details
            .consultants
            .iter()
            .map(|email| ConsultantView { capability: name.clone(), email: email.clone() })
            .collect(),
        email_input_id: format!("email-{name}"),
    }
}

fn verticals_label(details: &CapabilityDetails) -> String {
    details
        .industry_verticals
        .as_ref()
        .map_or_else(|| VERTICALS_PLACEHOLDER.to_owned(), |v| v.join(", "))
}

/// `f64` display drops a zero fraction, so `10.0` prints as `10`.
fn capacity_label(hours: f64) -> String {
    format!("{hours} hours/week available")
}

fn team_size_label(count: usize) -> String {
    format!("{count} consultants")
}
