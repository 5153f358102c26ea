//! Client-side state for the capability board.
//!
//! DESIGN
//! ======
//! `board` holds the latest listing snapshot, `status` the transient
//! per-capability messages. They are separate signals so showing a message
//! does not re-render every card.

pub mod board;
pub mod status;
