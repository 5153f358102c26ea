//! Leptos components for the capability board.
//!
//! DESIGN
//! ======
//! `CapabilityBoard` owns all state and network calls; `CapabilityCard` and
//! `StatusMessageView` only render what they are given and report user
//! actions through callbacks.

pub mod capability_board;
pub mod capability_card;
pub mod status_message;
